use serde::Serialize;
use std::collections::{HashMap, VecDeque};

pub const RECENT_CAPACITY: usize = 3;

/// Most-recent-first list of explored countries, with the flag URL of each.
#[derive(Debug, Default)]
pub struct RecentSearches {
    names: VecDeque<String>,
    flags: HashMap<String, String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RecentEntry {
    pub name: String,
    pub flag_url: Option<String>,
}

impl RecentSearches {
    /// Puts `name` at the front. A repeated name moves instead of duplicating;
    /// past capacity the oldest entry and its flag are dropped.
    pub fn record(&mut self, name: &str, flag_url: Option<&str>) {
        self.names.retain(|n| n != name);
        self.names.push_front(name.to_string());
        match flag_url {
            Some(url) if !url.is_empty() => {
                self.flags.insert(name.to_string(), url.to_string());
            }
            _ => {
                self.flags.remove(name);
            }
        }
        while self.names.len() > RECENT_CAPACITY {
            if let Some(evicted) = self.names.pop_back() {
                self.flags.remove(&evicted);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn entries(&self) -> Vec<RecentEntry> {
        self.names
            .iter()
            .map(|n| RecentEntry {
                name: n.clone(),
                flag_url: self.flags.get(n).cloned(),
            })
            .collect()
    }
}
