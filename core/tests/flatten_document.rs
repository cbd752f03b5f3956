use pretty_assertions::assert_eq;
use ramldoc_core::{flatten_str, AppError, FlatDocument};
use serde_json::json;

const LIBRARY_API: &str = r#"
title: Library API
version: v2
baseUri: https://library.example.com/{version}
traits:
  - searchable:
      queryParameters:
        q: { type: string }
  - paged:
      queryParameters:
        page: { type: number }
  - searchable:
      description: overrides the first definition
resources:
  - relativeUri: /books
    displayName: Books
    methods:
      - method: get
        params:
          - displayName: q
            type: string
          - displayName: filter.year
            type: number
          - displayName: filter.author
            type: string
            example: Le Guin
        responses:
          200:
            body:
              application/json:
                example: '[{"title": "The Dispossessed"}]'
      - method: post
        body:
          application/json:
            example: '{"title":"Lathe of Heaven","year":1971}'
          text/plain:
            example: Lathe of Heaven
        responses:
          201:
            body:
              application/json:
                example: '{"id": 7}'
              application/xml:
                example: <id>7</id>
    resources:
      - relativeUri: /{bookId}
        methods:
          - method: delete
        resources:
          - relativeUri: /loans
  - relativeUri: /members
"#;

fn flat() -> FlatDocument {
    flatten_str(LIBRARY_API).unwrap()
}

#[test]
fn test_record_per_node_in_pre_order() {
    let doc = flat();
    let paths: Vec<(String, String)> = doc
        .resources
        .iter()
        .map(|r| (r.base_path.clone(), r.path.clone()))
        .collect();

    assert_eq!(
        paths,
        vec![
            ("".to_string(), "".to_string()),
            ("".to_string(), "/books".to_string()),
            ("/books".to_string(), "/{bookId}".to_string()),
            ("/books/{bookId}".to_string(), "/loans".to_string()),
            ("".to_string(), "/members".to_string()),
        ]
    );
}

#[test]
fn test_traits_resolved_last_wins() {
    let doc = flat();
    assert_eq!(doc.traits.len(), 2);
    assert_eq!(
        doc.traits["searchable"],
        json!({"description": "overrides the first definition"})
    );
}

#[test]
fn test_render_model_shape() {
    let doc = flat();
    let model = serde_json::to_value(&doc).unwrap();

    assert_eq!(model["title"], json!("Library API"));
    assert_eq!(model["baseUri"], json!("https://library.example.com/{version}"));

    let books = &model["resources"][1];
    assert_eq!(books["displayName"], json!("Books"));
    assert!(books.get("resources").is_none());

    let get = &books["methods"][0];
    assert_eq!(
        get["requestExamples"],
        json!([{
            "q": "EXAMPLE: q",
            "filter": {"year": 1234567890, "author": "Le Guin"}
        }])
    );
    assert_eq!(
        get["responses"],
        json!([{
            "code": "200",
            "method": "get",
            "example": "[{\"title\": \"The Dispossessed\"}]"
        }])
    );

    let post = &books["methods"][1];
    assert_eq!(
        post["requestExamples"],
        json!([
            "{\n  \"title\": \"Lathe of Heaven\",\n  \"year\": 1971\n}",
            "Lathe of Heaven"
        ])
    );
    assert_eq!(
        post["responses"],
        json!([{"code": "201", "method": "post", "example": "<id>7</id>"}])
    );

    let delete = &model["resources"][2]["methods"][0];
    assert!(delete.get("requestExamples").is_none());
}

#[test]
fn test_unsupported_parameter_aborts_document() {
    let yaml = r#"
title: Broken
resources:
  - relativeUri: /ok
    methods:
      - method: get
  - relativeUri: /flags
    methods:
      - method: get
        params:
          - displayName: enabled
            type: boolean
"#;
    let err = flatten_str(yaml).unwrap_err();
    assert!(matches!(
        err,
        AppError::UnsupportedParameterType { ref name, ref kind } if name == "enabled" && kind == "boolean"
    ));
}
