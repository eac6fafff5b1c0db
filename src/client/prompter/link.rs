use url::Url;

/// An anchor found on the page.
///
/// Implementors compare by identity: two values are equal only if they refer to the
/// same anchor, not merely to the same address.
pub trait PageLink {
    /// Absolute address the anchor points to.
    fn href(&self) -> String;

    fn hostname(&self) -> String {
        Url::parse(&self.href())
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_default()
    }

    fn scheme(&self) -> String {
        Url::parse(&self.href())
            .map(|url| url.scheme().to_string())
            .unwrap_or_default()
    }
}

/// Whether following `link` leaves a page served from `page_host`.
///
/// Anchors without a host and `mailto:` anchors never count as external.
pub fn is_external<A: PageLink>(page_host: &str, link: &A) -> bool {
    let hostname = link.hostname();

    !hostname.is_empty() && hostname != page_host && link.scheme() != "mailto"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// No external anchors, or none were added since the last change.
    Unchanged,
    /// New external anchors were found; handlers must be bound on the whole set again.
    Changed,
}

/// Incrementally collected set of external anchors.
#[derive(Debug)]
pub struct LinkScanner<A> {
    external: Vec<A>,
    snapshot_len: usize,
}

impl<A> Default for LinkScanner<A> {
    fn default() -> Self {
        Self {
            external: Vec::new(),
            snapshot_len: 0,
        }
    }
}

impl<A: PageLink + PartialEq> LinkScanner<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every external anchor among `candidates` not seen before.
    ///
    /// Anchors are only ever added. Once collected, an anchor stays in the set even if
    /// it is removed from the page.
    pub fn scan<I>(&mut self, page_host: &str, candidates: I) -> ScanOutcome
    where
        I: IntoIterator<Item = A>,
    {
        for candidate in candidates {
            if is_external(page_host, &candidate) && !self.external.contains(&candidate) {
                self.external.push(candidate);
            }
        }

        if self.external.is_empty() || self.external.len() == self.snapshot_len {
            return ScanOutcome::Unchanged;
        }

        self.snapshot_len = self.external.len();

        ScanOutcome::Changed
    }

    pub fn external(&self) -> &[A] {
        &self.external
    }
}
