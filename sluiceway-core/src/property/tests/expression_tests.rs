use crate::flow::Attributes;
use crate::property::{AttributeExpression, PropertyError, parse_bool_token};

fn attrs(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn literal_resolves_to_itself() {
    // Arrange
    let expr = AttributeExpression::parse("12 B").unwrap();

    // Act / Assert
    assert_eq!(expr.as_literal(), Some("12 B"));
    assert_eq!(expr.resolve(&Attributes::new()).unwrap(), "12 B");
}

#[test]
fn attribute_reference_resolves_against_flow_attributes() {
    // Arrange
    let expr = AttributeExpression::parse("${numBytes}").unwrap();
    let attributes = attrs(&[("numBytes", "12 B")]);

    // Act / Assert
    assert_eq!(expr.as_literal(), None);
    assert_eq!(expr.resolve(&attributes).unwrap(), "12 B");
}

#[test]
fn missing_attribute_is_an_error_not_a_default() {
    // Arrange
    let expr = AttributeExpression::parse("${numBytes}").unwrap();

    // Act
    let err = expr.resolve(&Attributes::new()).unwrap_err();

    // Assert
    assert!(matches!(err, PropertyError::MissingAttribute { .. }));
}

#[test]
fn unterminated_expression_is_rejected() {
    let err = AttributeExpression::parse("${numBytes").unwrap_err();

    assert!(matches!(err, PropertyError::MalformedExpression { .. }));
}

#[test]
fn empty_attribute_name_is_rejected() {
    let err = AttributeExpression::parse("${}").unwrap_err();

    assert!(matches!(err, PropertyError::MalformedExpression { .. }));
}

#[test]
fn bool_token_accepts_exactly_true_and_false() {
    assert!(parse_bool_token("true").unwrap());
    assert!(!parse_bool_token("false").unwrap());
}

#[test]
fn bool_token_rejects_near_misses() {
    assert!(parse_bool_token("True").is_err());
    assert!(parse_bool_token("FALSE").is_err());
    assert!(parse_bool_token("maybe").is_err());
    assert!(parse_bool_token("certainly").is_err());
    assert!(parse_bool_token("").is_err());
}
