use std::collections::BTreeMap;

pub type RequestSeq = u64;

/// Backend operations that are sequenced independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RequestKind {
    Search,
    Domains,
    AddDomain,
    Crawl,
    Stats,
}

/// Tracks the latest sequence number issued per request kind so late
/// responses from superseded requests can be dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct RequestLedger {
    latest: BTreeMap<RequestKind, RequestSeq>,
}

impl RequestLedger {
    pub(crate) fn issue(&mut self, kind: RequestKind) -> RequestSeq {
        let seq = self.latest.entry(kind).or_insert(0);
        *seq += 1;
        *seq
    }

    pub(crate) fn is_current(&self, kind: RequestKind, seq: RequestSeq) -> bool {
        self.latest.get(&kind) == Some(&seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_sequenced_independently() {
        let mut ledger = RequestLedger::default();
        let s1 = ledger.issue(RequestKind::Stats);
        let d1 = ledger.issue(RequestKind::Domains);
        let s2 = ledger.issue(RequestKind::Stats);

        assert_eq!((s1, d1, s2), (1, 1, 2));
        assert!(!ledger.is_current(RequestKind::Stats, s1));
        assert!(ledger.is_current(RequestKind::Stats, s2));
        assert!(ledger.is_current(RequestKind::Domains, d1));
        assert!(!ledger.is_current(RequestKind::Search, 1));
    }
}
