use anyhow::{bail, Result};

/// Ordered list of permalinks queued for deletion. Duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlList {
    urls: Vec<String>,
}

impl UrlList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, url: impl AsRef<str>) -> bool {
        let url = url.as_ref().trim();
        if url.is_empty() {
            return false;
        }
        self.urls.push(url.to_string());
        true
    }

    /// Append a newline-separated batch; blank lines are skipped.
    /// Returns how many entries were added.
    pub fn push_batch(&mut self, text: &str) -> usize {
        let mut added = 0;
        for line in text.lines() {
            if self.push(line) { added += 1; }
        }
        added
    }

    /// Remove the entry at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.urls.len() { Some(self.urls.remove(index)) } else { None }
    }

    /// Remove several entries by their position in the list as it is now.
    pub fn remove_many(&mut self, indices: &[usize]) -> Result<Vec<String>> {
        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if let Some(&last) = sorted.last() {
            if last >= self.urls.len() {
                bail!("index {} is out of range (list has {} entries)", last, self.urls.len());
            }
        }
        let mut removed: Vec<String> = sorted.iter().rev().filter_map(|&i| self.remove(i)).collect();
        removed.reverse();
        Ok(removed)
    }

    pub fn len(&self) -> usize { self.urls.len() }
    pub fn is_empty(&self) -> bool { self.urls.is_empty() }
    pub fn as_slice(&self) -> &[String] { &self.urls }
}
