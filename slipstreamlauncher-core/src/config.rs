use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Persisted launcher state: account name -> private executable copy, plus the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherConfig {
    pub accounts: BTreeMap<String, PathBuf>,
    pub last_used: Option<String>,
}

/// Accepted shapes of `config.json`. Older launchers wrote the bare accounts map.
#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigDocument {
    Current {
        accounts: BTreeMap<String, PathBuf>,
        #[serde(default)]
        last_used: Option<String>,
    },
    Legacy(BTreeMap<String, PathBuf>),
}

impl LauncherConfig {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let config = match serde_json::from_str::<ConfigDocument>(text)? {
            ConfigDocument::Current { accounts, last_used } => Self { accounts, last_used },
            ConfigDocument::Legacy(accounts) => Self { accounts, last_used: None },
        };
        Ok(config.normalized())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Drops a selection that points at an account which is not registered.
    pub fn normalized(mut self) -> Self {
        if let Some(name) = &self.last_used {
            if !self.accounts.contains_key(name) {
                self.last_used = None;
            }
        }
        self
    }

    pub fn selected_account(&self) -> Option<&str> {
        self.last_used.as_deref()
    }

    /// Accounts offered by the switcher: everything except the selection, in name order.
    pub fn other_accounts(&self) -> Vec<&str> {
        self.accounts
            .keys()
            .map(String::as_str)
            .filter(|name| Some(*name) != self.selected_account())
            .collect()
    }

    pub(crate) fn remove_account(&mut self, name: &str) -> Option<PathBuf> {
        let removed = self.accounts.remove(name)?;
        if self.last_used.as_deref() == Some(name) {
            self.last_used = self.accounts.keys().next().cloned();
        }
        Some(removed)
    }
}
