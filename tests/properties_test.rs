use param_edit::{parse_path_params, parse_query_params, stringify_query_params, QueryParam};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn parsed_names_are_never_blank(query in ".*") {
        for param in parse_query_params(query.as_str()) {
            prop_assert!(!param.name.trim().is_empty());
        }
    }

    #[test]
    fn parse_is_deterministic(query in "[a-z=& ]{0,40}") {
        let first: Vec<_> = parse_query_params(query.as_str())
            .into_iter()
            .map(|p| (p.name, p.value))
            .collect();
        let second: Vec<_> = parse_query_params(query.as_str())
            .into_iter()
            .map(|p| (p.name, p.value))
            .collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn round_trip_single_pair(name in "[a-zA-Z0-9_.~-]{1,12}", value in "[a-zA-Z0-9_.~-]{1,12}") {
        let params = vec![QueryParam::new(name.clone(), value.clone())];
        let reparsed = parse_query_params(stringify_query_params(&params[..]).as_str());
        prop_assert_eq!(reparsed.len(), 1);
        prop_assert_eq!(&reparsed[0].name, &name);
        prop_assert_eq!(&reparsed[0].value, &value);
    }

    #[test]
    fn round_trip_lists(entries in prop::collection::vec(("[a-z]{1,8}", "[a-z0-9]{0,8}"), 0..8)) {
        let params: Vec<QueryParam> = entries
            .iter()
            .map(|(name, value)| QueryParam::new(name.as_str(), value.as_str()))
            .collect();
        let reparsed = parse_query_params(stringify_query_params(&params[..]).as_str());
        prop_assert_eq!(reparsed.len(), params.len());
        for (original, parsed) in params.iter().zip(&reparsed) {
            prop_assert!(original.same_pair(parsed));
        }
    }

    #[test]
    fn path_names_are_unique(segments in prop::collection::vec("(:[a-c]{1,2}|[a-c]{1,2})", 0..8)) {
        let url = format!("http://example.com/{}", segments.join("/"));
        let paths = parse_path_params(&url).unwrap();
        let unique: HashSet<_> = paths.iter().map(|p| p.name.as_str()).collect();
        prop_assert_eq!(unique.len(), paths.len());
        prop_assert!(paths.iter().all(|p| !p.name.is_empty() && p.value.is_empty()));
    }
}
