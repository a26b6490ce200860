//! Turns classified rows into pricing records.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::models::{MeatType, PricingRecord, ReportType};

use super::rules::ParsedLineFields;

/// Builds [`PricingRecord`]s for one report.
#[derive(Debug, Clone, Copy)]
pub struct RecordAssembler {
    report_type: ReportType,
    meat_type: MeatType,
}

impl RecordAssembler {
    pub fn new(report_type: ReportType) -> Self {
        Self {
            report_type,
            meat_type: report_type.meat_type(),
        }
    }

    /// Merge a parsed row with the section it was read under.
    ///
    /// Returns `None` when the row has no usable product name.
    pub fn assemble(
        &self,
        fields: ParsedLineFields,
        category: Option<String>,
    ) -> Option<PricingRecord> {
        let columns = fields.columns().clone();
        let mut additional_data = BTreeMap::new();

        let (product_name, product_code) = match fields {
            ParsedLineFields::StandardCut {
                code, description, ..
            } => {
                let name = format!("{} - {}", code, description);
                insert_trades(&mut additional_data, columns.trades);
                additional_data.insert("imps_code".to_string(), Value::from(code.clone()));
                additional_data.insert("sub_primal".to_string(), Value::from(description));
                (name, Some(code))
            }
            ParsedLineFields::GroundBeefCut { name, .. } => {
                insert_trades(&mut additional_data, columns.trades);
                additional_data.insert("imps_code".to_string(), Value::Null);
                additional_data.insert("sub_primal".to_string(), Value::from(name.clone()));
                (name, None)
            }
            ParsedLineFields::PorkCut { name, .. } => {
                let full_name = match category.as_deref() {
                    Some(cat) => format!("{} - {}", cat, name),
                    None => name.clone(),
                };
                additional_data.insert("sub_primal".to_string(), Value::from(name));
                (full_name, None)
            }
        };

        if product_name.trim().is_empty() {
            return None;
        }

        Some(PricingRecord {
            product_name,
            product_code,
            price: columns.weighted_average,
            low_price: columns.low_price,
            high_price: columns.high_price,
            volume: columns.volume,
            report_type: self.report_type,
            category,
            meat_type: self.meat_type,
            additional_data,
        })
    }
}

fn insert_trades(data: &mut BTreeMap<String, Value>, trades: Option<u64>) {
    data.insert(
        "num_trades".to_string(),
        trades.map(Value::from).unwrap_or(Value::Null),
    );
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;
    use crate::report::rules::PriceColumns;

    fn columns(trades: Option<u64>) -> PriceColumns {
        PriceColumns {
            trades,
            volume: Some(171141),
            low_price: Decimal::from_str("92.50").ok(),
            high_price: Decimal::from_str("109.90").ok(),
            weighted_average: Decimal::from_str("97.72").ok(),
        }
    }

    #[test]
    fn test_standard_cut_record() {
        let record = RecordAssembler::new(ReportType::BrandedBeef)
            .assemble(
                ParsedLineFields::StandardCut {
                    code: "109E".to_string(),
                    description: "Rib, ribeye, lip-on, bn-in".to_string(),
                    columns: columns(Some(55)),
                },
                Some("Upper 2/3 Choice".to_string()),
            )
            .unwrap();

        assert_eq!(record.product_name, "109E - Rib, ribeye, lip-on, bn-in");
        assert_eq!(record.product_code.as_deref(), Some("109E"));
        assert_eq!(record.num_trades(), Some(55));
        assert_eq!(record.sub_primal(), Some("Rib, ribeye, lip-on, bn-in"));
        assert_eq!(record.additional_data["imps_code"], Value::from("109E"));
        assert_eq!(record.meat_type, MeatType::Beef);
    }

    #[test]
    fn test_pork_record_prefixes_category() {
        let assembler = RecordAssembler::new(ReportType::PorkCuts);
        let fields = ParsedLineFields::PorkCut {
            name: "1/4 Trimmed Loin VAC".to_string(),
            columns: columns(None),
        };

        let record = assembler.assemble(fields.clone(), Some("Loin".to_string())).unwrap();
        assert_eq!(record.product_name, "Loin - 1/4 Trimmed Loin VAC");
        assert_eq!(record.meat_type, MeatType::Pork);
        assert_eq!(record.num_trades(), None);
        assert!(!record.additional_data.contains_key("num_trades"));

        let bare = assembler.assemble(fields, None).unwrap();
        assert_eq!(bare.product_name, "1/4 Trimmed Loin VAC");
        assert_eq!(bare.category, None);
    }

    #[test]
    fn test_ground_beef_record_has_no_code() {
        let record = RecordAssembler::new(ReportType::DailyAfternoon)
            .assemble(
                ParsedLineFields::GroundBeefCut {
                    name: "Ground Beef 73%".to_string(),
                    columns: columns(Some(4)),
                },
                Some("Ground Beef".to_string()),
            )
            .unwrap();

        assert_eq!(record.product_name, "Ground Beef 73%");
        assert_eq!(record.product_code, None);
        assert_eq!(record.additional_data["imps_code"], Value::Null);
        assert_eq!(record.sub_primal(), Some("Ground Beef 73%"));
    }
}
