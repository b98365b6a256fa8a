//! Write-through patching for approval toggles.
//!
//! After the backend acknowledges an approval change, the new flag is written
//! into the loader data and the cached responses directly instead of
//! refetching. Only the `approved` field of the matching transaction changes;
//! array position, the other records, and any pagination metadata keep their
//! shape.

use serde_json::Value;

use crate::api::Transaction;

/// Patch the matching transaction in a typed list. Returns whether a record
/// with the given id was found.
pub(crate) fn patch_transactions(
  transactions: &mut [Transaction],
  transaction_id: &str,
  approved: bool,
) -> bool {
  match transactions.iter_mut().find(|t| t.id == transaction_id) {
    Some(transaction) => {
      transaction.approved = approved;
      true
    }
    None => false,
  }
}

/// Patch the matching transaction inside a raw cached response.
///
/// Cached transaction responses come in two shapes: a bare array (the
/// per-employee list) and a paginated envelope with a `data` array. Both are
/// handled; anything else is left alone.
pub(crate) fn patch_response(value: &mut Value, transaction_id: &str, approved: bool) -> bool {
  let items = match value {
    Value::Array(items) => items,
    Value::Object(envelope) => match envelope.get_mut("data") {
      Some(Value::Array(items)) => items,
      _ => return false,
    },
    _ => return false,
  };

  for item in items {
    if item.get("id").and_then(Value::as_str) == Some(transaction_id) {
      item["approved"] = Value::Bool(approved);
      return true;
    }
  }
  false
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::sample_transactions;
  use serde_json::json;

  #[test]
  fn patch_flips_only_the_matching_record() {
    let mut transactions = sample_transactions(4);
    let ids: Vec<String> = transactions.iter().map(|t| t.id.clone()).collect();

    assert!(patch_transactions(&mut transactions, "t2", true));

    assert_eq!(transactions.len(), 4);
    let after: Vec<String> = transactions.iter().map(|t| t.id.clone()).collect();
    assert_eq!(after, ids, "order must be preserved");
    for t in &transactions {
      assert_eq!(t.approved, t.id == "t2");
    }
  }

  #[test]
  fn patch_reports_missing_ids() {
    let mut transactions = sample_transactions(2);
    assert!(!patch_transactions(&mut transactions, "t99", true));
    assert!(transactions.iter().all(|t| !t.approved));
  }

  #[test]
  fn patch_response_handles_the_paginated_envelope() {
    let mut value = json!({
      "data": [
        {"id": "t0", "approved": false},
        {"id": "t1", "approved": false},
      ],
      "nextPage": 1,
    });

    assert!(patch_response(&mut value, "t1", true));

    assert_eq!(value["data"][1]["approved"], json!(true));
    assert_eq!(value["data"][0]["approved"], json!(false));
    assert_eq!(value["nextPage"], json!(1), "pagination metadata untouched");
  }

  #[test]
  fn patch_response_handles_the_bare_list() {
    let mut value = json!([
      {"id": "t0", "approved": true},
      {"id": "t1", "approved": false},
    ]);

    assert!(patch_response(&mut value, "t0", false));
    assert_eq!(value[0]["approved"], json!(false));
  }

  #[test]
  fn patch_response_ignores_foreign_shapes() {
    let mut value = json!([{"id": "e1", "firstName": "Ada", "lastName": "Lovelace"}]);
    assert!(!patch_response(&mut value, "t0", true));

    let mut scalar = json!(42);
    assert!(!patch_response(&mut scalar, "t0", true));
  }
}
