use param_edit::{enabled_query_params, parse_query_params, stringify_query_params, QueryParam};

fn pairs(params: &[QueryParam]) -> Vec<(String, String)> {
    params
        .iter()
        .map(|p| (p.name.clone(), p.value.clone()))
        .collect()
}

fn pair(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}

#[test_log::test]
fn test_parse_documented_cases() {
    assert!(parse_query_params("").is_empty());
    assert!(parse_query_params(None).is_empty());

    assert_eq!(
        pairs(&parse_query_params("a=1&b=2")),
        vec![pair("a", "1"), pair("b", "2")]
    );
    assert_eq!(pairs(&parse_query_params("a=1=2")), vec![pair("a", "1=2")]);
    assert_eq!(pairs(&parse_query_params("=x&b=2")), vec![pair("b", "2")]);
}

#[test_log::test]
fn test_parse_real_world_query() {
    let params = parse_query_params("q=rust lang&page=2&filter=type=repo&&debug&sig=YWJj==");
    assert_eq!(
        pairs(&params),
        vec![
            pair("q", "rust lang"),
            pair("page", "2"),
            pair("filter", "type=repo"),
            pair("debug", ""),
            pair("sig", "YWJj=="),
        ]
    );
}

#[test]
fn test_whitespace_names_are_dropped_but_padded_names_kept() {
    let params = parse_query_params(" \t=1& a =2");
    assert_eq!(pairs(&params), vec![pair(" a ", "2")]);
}

#[test]
fn test_stringify_documented_cases() {
    let params = vec![QueryParam::new("a", "1"), QueryParam::new("b", "")];
    assert_eq!(stringify_query_params(&params[..]), "a=1&b");

    let empty: Vec<QueryParam> = Vec::new();
    assert_eq!(stringify_query_params(&empty[..]), "");
    assert_eq!(stringify_query_params(None), "");
}

#[test]
fn test_caller_filters_disabled_before_stringify() {
    let params = vec![
        QueryParam::new("keep", "1"),
        QueryParam::new("drop", "2").with_enabled(false),
        QueryParam::blank(),
    ];

    let enabled = enabled_query_params(&params);
    assert_eq!(enabled.len(), 2);
    assert_eq!(stringify_query_params(&enabled[..]), "keep=1");
}

#[test]
fn test_round_trip_modulo_excluded_entries() {
    let params = vec![
        QueryParam::new("a", "1"),
        QueryParam::new("", "orphan"),
        QueryParam::new("b", "x=y"),
        QueryParam::new("flag", ""),
        QueryParam::new("off", "1").with_enabled(false),
    ];

    let query = stringify_query_params(&enabled_query_params(&params)[..]);
    assert_eq!(query, "a=1&b=x=y&flag");

    let reparsed = parse_query_params(query.as_str());
    assert_eq!(
        pairs(&reparsed),
        vec![pair("a", "1"), pair("b", "x=y"), pair("flag", "")]
    );
}
