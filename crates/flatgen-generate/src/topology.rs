use chrono::NaiveDateTime;
use rand::RngCore;
use tracing::debug;

use flatgen_core::{ControlFlags, FileFormat, RecordKind, Topology};

use crate::errors::GenerationError;
use crate::layout::FormatLayout;
use crate::provider::ValueProvider;
use crate::schema::{ParentRow, RecordSchema, RowContext, compute_row};
use crate::value::FieldValue;

/// One physical body line: a row of one record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef {
    pub kind: RecordKind,
    pub row: usize,
}

/// Every row of one file, fully computed, plus the order lines are written in.
#[derive(Debug, Clone)]
pub struct RecordSet {
    pub format: FileFormat,
    pub topology: Topology,
    pub header: RecordSchema,
    pub body: Vec<RecordSchema>,
    pub plan: Vec<LineRef>,
    pub trailer: RecordSchema,
}

impl RecordSet {
    pub fn schema(&self, kind: RecordKind) -> Option<&RecordSchema> {
        match kind {
            RecordKind::Header => Some(&self.header),
            RecordKind::Trailer => Some(&self.trailer),
            _ => self.body.iter().find(|schema| schema.kind() == kind),
        }
    }

    pub fn body_lines(&self) -> u64 {
        self.plan.len() as u64
    }

    /// Body lines in write order.
    pub fn body_rows(&self) -> impl Iterator<Item = (&RecordSchema, &[FieldValue])> + '_ {
        self.plan.iter().filter_map(|line| {
            let schema = self.schema(line.kind)?;
            schema.row(line.row).map(|row| (schema, row))
        })
    }
}

/// Materializes the header, body and trailer rows of one file.
pub struct TopologyBuilder<'a> {
    layout: &'a FormatLayout,
    flags: &'a ControlFlags,
    generated_at: NaiveDateTime,
    payer_id: &'a str,
}

impl<'a> TopologyBuilder<'a> {
    pub fn new(
        layout: &'a FormatLayout,
        flags: &'a ControlFlags,
        generated_at: NaiveDateTime,
        payer_id: &'a str,
    ) -> Self {
        Self {
            layout,
            flags,
            generated_at,
            payer_id,
        }
    }

    pub fn build<R: RngCore>(
        &self,
        provider: &mut ValueProvider<R>,
    ) -> Result<RecordSet, GenerationError> {
        let topology = self.layout.topology();
        let primary = self.flags.counts.primary();
        let children = match topology {
            Topology::Flat => 0,
            Topology::Nested => self.flags.counts.children(),
        };
        let body_count = topology.body_lines(primary, children).ok_or_else(|| {
            GenerationError::InvalidRequest(format!(
                "{primary} rows with {children} children each overflow the line count"
            ))
        })?;

        let base = RowContext {
            format: self.layout.format,
            flags: self.flags,
            generated_at: self.generated_at,
            payer_id: self.payer_id,
            header: None,
            parent: None,
            row_index: 0,
            body_count,
        };

        let mut header = RecordSchema::new(RecordKind::Header, self.layout.header_fields());
        let values = compute_row(header.fields(), &base, provider)?;
        header.push_row(values, None);
        let header_view = header.view(0).ok_or_else(|| {
            GenerationError::InvalidLayout("header row was not computed".to_string())
        })?;

        let mut body: Vec<RecordSchema> = Vec::new();
        for table in self.layout.body_tables() {
            let mut schema = RecordSchema::new(table.kind, table.fields);
            match table.parent {
                None => {
                    for index in 0..to_index(primary)? {
                        let ctx = RowContext {
                            header: Some(header_view),
                            row_index: index,
                            ..base
                        };
                        let values = compute_row(schema.fields(), &ctx, provider)?;
                        schema.push_row(values, None);
                    }
                }
                Some(owner_kind) => {
                    let owner = body
                        .iter()
                        .find(|candidate| candidate.kind() == owner_kind)
                        .ok_or_else(|| {
                            GenerationError::InvalidLayout(format!(
                                "{} rows need {owner_kind} rows first",
                                table.kind
                            ))
                        })?;
                    let per_owner = rows_per_owner(table.kind, children);
                    let mut index = 0;
                    for owner_row in 0..owner.len() {
                        let row = owner.view(owner_row).ok_or_else(|| {
                            GenerationError::InvalidLayout(format!(
                                "{owner_kind} row {owner_row} is missing"
                            ))
                        })?;
                        for _ in 0..per_owner {
                            let ctx = RowContext {
                                header: Some(header_view),
                                parent: Some(ParentRow {
                                    kind: owner_kind,
                                    row,
                                }),
                                row_index: index,
                                ..base
                            };
                            let values = compute_row(schema.fields(), &ctx, provider)?;
                            schema.push_row(values, Some(owner_row));
                            index += 1;
                        }
                    }
                }
            }
            debug!(kind = %schema.kind(), rows = schema.len(), "record schema computed");
            body.push(schema);
        }

        let plan = write_plan(topology, primary, children, body_count)?;
        if plan.len() as u64 != body_count {
            return Err(GenerationError::InvalidLayout(format!(
                "write plan holds {} lines, expected {body_count}",
                plan.len()
            )));
        }

        let mut trailer = RecordSchema::new(RecordKind::Trailer, self.layout.trailer_fields());
        let ctx = RowContext {
            header: Some(header_view),
            ..base
        };
        let values = compute_row(trailer.fields(), &ctx, provider)?;
        trailer.push_row(values, None);

        Ok(RecordSet {
            format: self.layout.format,
            topology,
            header,
            body,
            plan,
            trailer,
        })
    }
}

fn rows_per_owner(kind: RecordKind, children: u64) -> u64 {
    match kind {
        RecordKind::LineLevel => children,
        _ => 1,
    }
}

fn to_index(count: u64) -> Result<usize, GenerationError> {
    usize::try_from(count)
        .map_err(|_| GenerationError::InvalidRequest(format!("row count {count} is too large")))
}

/// Flat: every detail row. Nested: each claim, its status, then each line
/// followed by its status.
fn write_plan(
    topology: Topology,
    primary: u64,
    children: u64,
    body_count: u64,
) -> Result<Vec<LineRef>, GenerationError> {
    let primary = to_index(primary)?;
    let children = to_index(children)?;
    let capacity = to_index(body_count)?;
    let plan = match topology {
        Topology::Flat => (0..primary)
            .map(|row| LineRef {
                kind: RecordKind::Detail,
                row,
            })
            .collect(),
        Topology::Nested => {
            let mut plan = Vec::with_capacity(capacity);
            for claim in 0..primary {
                plan.push(LineRef {
                    kind: RecordKind::ClaimLevel,
                    row: claim,
                });
                plan.push(LineRef {
                    kind: RecordKind::ClaimStatus,
                    row: claim,
                });
                for line in 0..children {
                    let row = claim * children + line;
                    plan.push(LineRef {
                        kind: RecordKind::LineLevel,
                        row,
                    });
                    plan.push(LineRef {
                        kind: RecordKind::LineStatus,
                        row,
                    });
                }
            }
            plan
        }
    };
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use flatgen_core::{LoadType, RecordCounts};

    use crate::layout::layout_for;

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|date| date.and_hms_opt(9, 30, 0))
            .expect("valid timestamp")
    }

    fn build(format: FileFormat, counts: RecordCounts, optional: bool) -> RecordSet {
        let layout = layout_for(format);
        let flags = ControlFlags::new(LoadType::Full, optional, 5, counts).expect("flags");
        let mut provider = ValueProvider::seeded(42);
        TopologyBuilder::new(&layout, &flags, generated_at(), "PAYER00001")
            .build(&mut provider)
            .expect("record set")
    }

    #[test]
    fn nested_plan_interleaves_claims_lines_and_statuses() {
        let plan = write_plan(Topology::Nested, 2, 2, 12).expect("plan");
        let kinds: Vec<_> = plan.iter().map(|line| (line.kind, line.row)).collect();
        assert_eq!(
            kinds,
            vec![
                (RecordKind::ClaimLevel, 0),
                (RecordKind::ClaimStatus, 0),
                (RecordKind::LineLevel, 0),
                (RecordKind::LineStatus, 0),
                (RecordKind::LineLevel, 1),
                (RecordKind::LineStatus, 1),
                (RecordKind::ClaimLevel, 1),
                (RecordKind::ClaimStatus, 1),
                (RecordKind::LineLevel, 2),
                (RecordKind::LineStatus, 2),
                (RecordKind::LineLevel, 3),
                (RecordKind::LineStatus, 3),
            ]
        );
    }

    #[test]
    fn claim_statuses_copy_their_owner_keys() {
        let set = build(
            FileFormat::Claim,
            RecordCounts::Claims {
                claims: 3,
                lines_per_claim: 2,
            },
            false,
        );
        let claims = set.schema(RecordKind::ClaimLevel).expect("claims");
        let statuses = set.schema(RecordKind::ClaimStatus).expect("claim statuses");
        let lines = set.schema(RecordKind::LineLevel).expect("lines");
        let line_statuses = set.schema(RecordKind::LineStatus).expect("line statuses");

        for claim in 0..3 {
            let key = claims.value(claim, "Payer Claim Identification Number");
            assert_eq!(statuses.value(claim, "Payer Claim Identification Number"), key);
            assert!(statuses
                .value(claim, "Line Item Control Number")
                .is_some_and(FieldValue::is_empty));
            for line in 0..2 {
                let row = claim * 2 + line;
                assert_eq!(lines.value(row, "Payer Claim Identification Number"), key);
                assert_eq!(
                    line_statuses.value(row, "Line Item Control Number"),
                    lines.value(row, "Line Item Control Number")
                );
                assert!(line_statuses
                    .value(row, "Payer Claim Identification Number")
                    .is_some_and(FieldValue::is_empty));
            }
        }
        assert_eq!(set.body_lines(), 2 * 3 + 2 * 3 * 2);
    }

    #[test]
    fn trailer_reports_body_lines() {
        let set = build(FileFormat::PlanBenefit, RecordCounts::Entries(4), true);
        assert_eq!(set.trailer.value(0, "Record Count"), Some(&FieldValue::Int(4)));
    }

    #[test]
    fn payer_id_is_shared_by_every_body_row() {
        let set = build(FileFormat::Eligibility, RecordCounts::Entries(5), true);
        let detail = set.schema(RecordKind::Detail).expect("detail");
        let payer_ids = detail.column("Payer ID").expect("payer column");
        assert!(payer_ids.into_iter().all(|value| value.matches("PAYER00001")));
    }
}
