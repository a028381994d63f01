//! Batch verification tests: one result per input, no short-circuiting.

#[cfg(test)]
mod tests {
    use ministack_auth::{VerifyConfig, VerifyError, verify_batch_at};

    use crate::{TEST_QUERY_ID, build_init_data, minimal_user, premium_user, test_token};

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_should_verify_each_item_independently() {
        let token = test_token();
        let valid_a = build_init_data(&minimal_user(), TEST_QUERY_ID, &token, NOW);
        let valid_b = build_init_data(&premium_user(), "another-query", &token, NOW);
        let payloads = [
            valid_a.as_str(),
            "",
            valid_b.as_str(),
            "query_id=test&auth_date=1",
        ];

        let items = verify_batch_at(&payloads, &token, &VerifyConfig::default(), NOW);

        assert_eq!(items.len(), 4);
        assert!(items[0].result.is_ok());
        assert_eq!(items[1].result, Err(VerifyError::MissingPayload));
        assert!(items[2].result.is_ok(), "failure at index 1 must not block index 2");
        assert_eq!(items[3].result, Err(VerifyError::MissingSignature));

        for (expected_index, item) in items.iter().enumerate() {
            assert_eq!(item.item_index, expected_index);
        }
    }

    #[test]
    fn test_should_render_soft_failure_records() {
        let token = test_token();
        let valid = build_init_data(&minimal_user(), TEST_QUERY_ID, &token, NOW);
        let payloads = [valid.as_str(), ""];

        let items = verify_batch_at(&payloads, &token, &VerifyConfig::default(), NOW);
        let outputs: Vec<_> = items
            .iter()
            .map(|item| item.to_output(&VerifyConfig::default()))
            .collect();

        assert!(outputs[0].verified && outputs[0].is_authenticated);
        assert_eq!(outputs[0].user_id, Some(123_456_789));

        assert!(!outputs[1].verified && !outputs[1].is_authenticated);
        assert_eq!(outputs[1].error.as_deref(), Some("Init data is required"));
        assert!(outputs[1].user.is_none());
    }

    #[test]
    fn test_should_use_one_clock_sample_for_whole_batch() {
        let token = test_token();
        // At the shared `now`, this payload sits exactly on the boundary.
        let boundary = build_init_data(&minimal_user(), TEST_QUERY_ID, &token, NOW - 86_400);
        let payloads = vec![boundary; 3];

        let items = verify_batch_at(&payloads, &token, &VerifyConfig::default(), NOW);
        assert!(items.iter().all(|item| item.result.is_ok()));
    }
}
