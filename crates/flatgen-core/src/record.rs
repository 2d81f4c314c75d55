use serde::{Deserialize, Serialize};

/// Kind of a physical record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Header,
    Detail,
    ClaimLevel,
    ClaimStatus,
    LineLevel,
    LineStatus,
    Trailer,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Header => "header",
            RecordKind::Detail => "detail",
            RecordKind::ClaimLevel => "claim_level",
            RecordKind::ClaimStatus => "claim_status",
            RecordKind::LineLevel => "line_level",
            RecordKind::LineStatus => "line_status",
            RecordKind::Trailer => "trailer",
        }
    }

    /// Record identifier written in the first field of the line.
    pub fn record_id(self) -> &'static str {
        match self {
            RecordKind::Header => "HDR",
            RecordKind::Detail | RecordKind::LineLevel => "DTL",
            RecordKind::ClaimLevel => "CLM",
            RecordKind::ClaimStatus | RecordKind::LineStatus => "STC",
            RecordKind::Trailer => "TRLR",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the body between header and trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// `Header, Detail x N, Trailer`.
    Flat,
    /// `Header, (ClaimLevel, ClaimStatus, (LineLevel, LineStatus) x L) x C, Trailer`.
    Nested,
}

impl Topology {
    /// Number of body lines for the given counts, or `None` when it does not
    /// fit in a `u64`.
    pub fn body_lines(self, primary: u64, children: u64) -> Option<u64> {
        match self {
            Topology::Flat => Some(primary),
            Topology::Nested => {
                let per_claim = children.checked_mul(2)?.checked_add(2)?;
                primary.checked_mul(per_claim)
            }
        }
    }
}
