//! Desired-state tree submitted by an operator
//!
//! Everything named in the tree is kept; everything the tree leaves out is
//! deleted. Nesting decides the target grouping: an entity listed under a
//! grouping other than its current one is moved there.
//!
//! ```json
//! { "caseKey": "1234567890123456",
//!   "groupings": [ { "id": 1, "fees": [ { "id": 101 } ] } ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::view::CaseView;

/// Root of the desired-state tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchRequest {
    /// CCD case number; an empty value is rejected before reconciliation
    #[serde(default, alias = "ccdCaseNumber")]
    pub case_key: String,
    #[serde(default, alias = "serviceRequests")]
    pub groupings: Vec<GroupingPatch>,
}

/// A grouping to keep, identified by id or else by payment reference
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, alias = "paymentReference", skip_serializing_if = "Option::is_none")]
    pub reference_key: Option<String>,
    #[serde(default)]
    pub fees: Vec<FeePatch>,
    #[serde(default)]
    pub payments: Vec<PaymentPatch>,
}

/// A fee to keep; an entry without an id keeps only its remissions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub remissions: Vec<RemissionPatch>,
}

/// A remission to keep, identified by its Help-with-Fees reference
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemissionPatch {
    #[serde(default, alias = "hwfReference", skip_serializing_if = "Option::is_none")]
    pub reference_key: Option<String>,
}

/// A payment to keep, identified by id or else by payment reference
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, alias = "reference", skip_serializing_if = "Option::is_none")]
    pub reference_key: Option<String>,
    #[serde(default)]
    pub refunds: Vec<RefundPatch>,
    #[serde(default)]
    pub apportionments: Vec<ApportionmentPatch>,
}

/// A refund to keep, identified by its reference
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundPatch {
    #[serde(default, alias = "reference", skip_serializing_if = "Option::is_none")]
    pub reference_key: Option<String>,
}

/// An apportionment to keep, identified by id
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApportionmentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl PatchRequest {
    pub fn new(case_key: impl Into<String>) -> Self {
        Self {
            case_key: case_key.into(),
            groupings: Vec::new(),
        }
    }

    /// Tree that keeps everything the view shows where it is shown
    ///
    /// Every entry is identified by id so the result does not depend on
    /// reference uniqueness. Reconciling a consistent case against its own
    /// mirror yields no statements.
    pub fn mirror(view: &CaseView) -> Self {
        let groupings = view
            .groupings
            .iter()
            .map(|g| GroupingPatch {
                id: Some(g.id),
                reference_key: g.payment_reference.clone(),
                fees: g
                    .fees
                    .iter()
                    .map(|f| FeePatch {
                        id: Some(f.id),
                        remissions: f
                            .remissions
                            .iter()
                            .map(|r| RemissionPatch {
                                reference_key: r.hwf_reference.clone(),
                            })
                            .collect(),
                    })
                    .collect(),
                payments: g
                    .payments
                    .iter()
                    .map(|p| PaymentPatch {
                        id: Some(p.id),
                        reference_key: p.reference.clone(),
                        refunds: p
                            .refunds
                            .iter()
                            .map(|r| RefundPatch {
                                reference_key: r.reference.clone(),
                            })
                            .collect(),
                        apportionments: p
                            .apportionments
                            .iter()
                            .map(|a| ApportionmentPatch { id: Some(a.id) })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            case_key: view.case_key.clone(),
            groupings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_tree() {
        let json = r#"{
            "caseKey": "1234567890123456",
            "groupings": [{
                "id": 1,
                "fees": [{ "id": 101, "remissions": [{ "referenceKey": "HWF-1" }] }],
                "payments": [{
                    "referenceKey": "RC-1",
                    "refunds": [{ "referenceKey": "RF-1" }],
                    "apportionments": [{ "id": 7 }]
                }]
            }]
        }"#;

        let request: PatchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.case_key, "1234567890123456");
        let grouping = &request.groupings[0];
        assert_eq!(grouping.id, Some(1));
        assert_eq!(grouping.fees[0].remissions[0].reference_key.as_deref(), Some("HWF-1"));
        let payment = &grouping.payments[0];
        assert_eq!(payment.id, None);
        assert_eq!(payment.reference_key.as_deref(), Some("RC-1"));
        assert_eq!(payment.apportionments[0].id, Some(7));
    }

    #[test]
    fn test_parse_accepts_service_request_field_names() {
        let json = r#"{
            "ccdCaseNumber": "1111222233334444",
            "serviceRequests": [{
                "paymentReference": "2024-0001",
                "fees": [{ "remissions": [{ "hwfReference": "HWF-9" }] }],
                "payments": [{ "reference": "RC-9", "refunds": [{ "reference": "RF-9" }] }]
            }]
        }"#;

        let request: PatchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.case_key, "1111222233334444");
        let grouping = &request.groupings[0];
        assert_eq!(grouping.reference_key.as_deref(), Some("2024-0001"));
        assert_eq!(grouping.fees[0].id, None);
        assert_eq!(grouping.fees[0].remissions[0].reference_key.as_deref(), Some("HWF-9"));
        assert_eq!(grouping.payments[0].refunds[0].reference_key.as_deref(), Some("RF-9"));
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let request: PatchRequest = serde_json::from_str(r#"{"caseKey": "1"}"#).unwrap();
        assert!(request.groupings.is_empty());

        let request: PatchRequest = serde_json::from_str(r#"{"groupings": [{}]}"#).unwrap();
        assert_eq!(request.case_key, "");
        assert_eq!(request.groupings[0], GroupingPatch::default());
    }

    #[test]
    fn test_serialize_omits_absent_identifiers() {
        let request = PatchRequest {
            case_key: "1".to_string(),
            groupings: vec![GroupingPatch {
                id: Some(3),
                ..Default::default()
            }],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"caseKey":"1","groupings":[{"id":3,"fees":[],"payments":[]}]}"#
        );
    }
}
