use serde_json::{json, Value};

/// Wraps a page of dumped records the way the search API returns result
/// lists: `{"hits": {"hits": [...], "total": N}}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListSchema;

impl ListSchema {
    /// Wrap `hits`. When `total` is `None` the number of hits is used, which
    /// is only correct for unpaginated lists.
    #[must_use]
    pub fn dump(&self, hits: Vec<Value>, total: Option<usize>) -> Value {
        let total = total.unwrap_or(hits.len());
        json!({
            "hits": {
                "hits": hits,
                "total": total,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_total_defaults_to_len() {
        let value = ListSchema.dump(vec![json!({}), json!({})], None);
        assert_eq!(value["hits"]["total"], 2);
        assert_eq!(value["hits"]["hits"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_list_reported_total() {
        let value = ListSchema.dump(vec![json!({"titles": ["x"]})], Some(120));
        assert_eq!(value, json!({"hits": {"hits": [{"titles": ["x"]}], "total": 120}}));
    }

    #[test]
    fn test_list_empty() {
        let value = ListSchema.dump(Vec::new(), None);
        assert_eq!(value, json!({"hits": {"hits": [], "total": 0}}));
    }
}
