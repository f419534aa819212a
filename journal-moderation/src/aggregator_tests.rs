//! End-to-end tests for record moderation.

#[cfg(test)]
mod tests {
    use crate::aggregator::evaluate_record;
    use crate::category::Category;
    use crate::evaluator::{evaluate_text, ContentEvaluator};
    use crate::message::describe_violations;
    use crate::record::{DynamicRecord, Moderable, PostFields};
    use crate::testing::{assert_clean, assert_flagged, assert_no_category, assert_violation_terms};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(value: serde_json::Value) -> DynamicRecord {
        DynamicRecord::from_json(&value).unwrap()
    }

    #[test]
    fn test_clean_sermon_note() {
        let result = evaluate_record(&record(json!({ "myWord": "This sermon was great" })));
        assert_clean(&result);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "isClean": true, "violations": [] })
        );
    }

    #[test]
    fn test_union_across_scalar_and_list_fields() {
        let result = evaluate_record(&record(json!({
            "myWord": "I was so damn happy",
            "prayerPoints": ["pray for my family", "fuck this trial"]
        })));

        assert_flagged(&result);
        assert_eq!(result.violations().len(), 1);
        assert_violation_terms(&result, Category::Profanity, &["damn", "fuck"]);
    }

    #[test]
    fn test_targeted_phrases() {
        let result = evaluate_record(&record(json!({
            "myTestimony": "god is dead and the church is evil"
        })));

        assert_violation_terms(
            &result,
            Category::TargetedDisparagement,
            &["god is dead", "church is evil"],
        );
    }

    #[test]
    fn test_null_empty_and_empty_list_fields() {
        let result = evaluate_record(&record(json!({
            "preacher": null,
            "myWord": "",
            "prayerPoints": []
        })));
        assert_clean(&result);
    }

    #[test]
    fn test_typed_post_matches_dynamic_record() {
        let post = PostFields::new()
            .with_word("I was so damn happy")
            .with_prayer_point("pray for my family")
            .with_prayer_point("fuck this trial");
        let dynamic = record(json!({
            "myWord": "I was so damn happy",
            "prayerPoints": ["pray for my family", "fuck this trial"]
        }));
        assert_eq!(evaluate_record(&post), evaluate_record(&dynamic));
    }

    #[test]
    fn test_same_term_in_two_fields_reported_once() {
        let result = evaluate_record(&record(json!({
            "myWord": "damn",
            "myResponse": "DAMN",
            "prayerPoints": ["damn again"]
        })));
        assert_violation_terms(&result, Category::Profanity, &["damn"]);
        assert_eq!(result.term_count(), 1);
    }

    #[test]
    fn test_two_terms_same_category_different_fields() {
        let result = evaluate_record(&record(json!({
            "myWord": "that was murder",
            "myAffirmation": "no genocide"
        })));
        assert_violation_terms(&result, Category::HateSpeech, &["murder", "genocide"]);
        assert_no_category(&result, Category::Profanity);
    }

    #[test]
    fn test_output_order_is_category_order_not_field_order() {
        let result = evaluate_record(&record(json!({
            "first": "nude",
            "second": "murder",
            "third": "crap"
        })));
        assert_eq!(
            result.categories(),
            vec![Category::Profanity, Category::HateSpeech, Category::ExplicitContent]
        );
    }

    #[test]
    fn test_field_names_do_not_affect_matching() {
        let a = evaluate_record(&record(json!({ "damn": "nothing here" })));
        assert_clean(&a);

        let b = evaluate_record(&record(json!({ "x": "crap" })));
        let c = evaluate_record(&record(json!({ "y": "crap" })));
        assert_eq!(b, c);
    }

    #[test]
    fn test_idempotent() {
        let input = record(json!({
            "myWord": "naked and damn",
            "prayerPoints": ["hail satan", "kill all doubt"]
        }));
        let first = evaluate_record(&input);
        let second = evaluate_record(&input);
        assert_eq!(first, second);
        assert_eq!(describe_violations(&first), describe_violations(&second));
    }

    #[test]
    fn test_is_clean_consistency() {
        let inputs = [
            json!({}),
            json!({ "a": "hello" }),
            json!({ "a": "shit", "b": ["porn"] }),
            json!({ "a": null, "b": ["", "fine"] }),
        ];
        for input in inputs {
            let result = evaluate_record(&record(input));
            assert_eq!(result.is_clean(), result.violations().is_empty());
        }
    }

    #[test]
    fn test_record_result_matches_per_text_union() {
        let post = PostFields::new()
            .with_word("damn")
            .with_testimony("hail satan")
            .with_prayer_point("crap");

        let evaluator = ContentEvaluator::builtin();
        let per_text: Vec<_> = post
            .fields()
            .into_iter()
            .flat_map(|(_, value)| value.texts().collect::<Vec<_>>())
            .flat_map(|text| evaluate_text(text))
            .collect();

        assert_eq!(
            evaluator.evaluate_record(&post),
            crate::aggregator::ModerationResult::from_violations(per_text)
        );
    }

    #[test]
    fn test_message_for_multi_category_record() {
        let result = evaluate_record(&record(json!({
            "myWord": "damn",
            "myTestimony": "xxx"
        })));
        assert_eq!(
            describe_violations(&result),
            "Your post contains profanity or cursing. \
             Your post contains inappropriate or explicit content. \
             Please revise your post to maintain a positive, uplifting environment."
        );
    }

    #[test]
    fn test_non_text_value_rejected_before_evaluation() {
        let err = DynamicRecord::from_json(&json!({ "myWord": "damn", "likes": 3 })).unwrap_err();
        assert!(err.is_contract_violation());
    }
}
