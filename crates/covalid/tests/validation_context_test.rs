//! Context threading through composite rules.

use std::sync::Arc;

use covalid::prelude::*;
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct Tenant {
    reserved: Vec<&'static str>,
}

fn not_reserved() -> DynRule {
    Arc::new(with_context(|ctx, value| {
        let Some(tenant) = ctx.get::<Tenant>("tenant") else {
            return Ok(());
        };
        match value.as_str() {
            Some(name) if tenant.reserved.iter().any(|r| *r == name) => {
                Err(ValidationError::new("reserved", "{{.name}} is reserved")
                    .with_param("name", name)
                    .into())
            }
            _ => Ok(()),
        }
    }))
}

fn tenant_context() -> ValidationContext {
    ValidationContextBuilder::new()
        .with("tenant", Tenant { reserved: vec!["admin", "root"] })
        .build()
}

#[test]
fn context_reaches_rules_inside_each() {
    let names = ["alice", "root", "admin"];
    let rules = rules![each(vec![not_reserved()])];

    let err = validate_with_context(&tenant_context(), &names, &rules).unwrap_err();
    assert_eq!(err.to_string(), "1: root is reserved; 2: admin is reserved.");
    assert!(validate(&names, &rules).is_ok());
}

#[test]
fn context_reaches_rules_inside_map_and_when() {
    let payload: std::collections::BTreeMap<&str, &str> =
        [("owner", "root"), ("team", "core")].into_iter().collect();
    let rules = rules![map([
        key("owner", rules![when(true, vec![not_reserved()])]),
        key("team", rules![when(false, rules![required()]).otherwise(vec![not_reserved()])]),
    ])];

    let err = validate_with_context(&tenant_context(), &payload, &rules).unwrap_err();
    assert_eq!(err.to_string(), "owner: root is reserved.");
}

#[test]
fn context_reaches_struct_fields() {
    let account = StructValue::new("Account").tagged_field("Login", "login", "admin");
    let err = validate_struct_with_context(
        &tenant_context(),
        &Value::from(account),
        [field("Login", vec![not_reserved()])],
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "login: admin is reserved.");
}

#[test]
fn child_context_falls_back_to_parent() {
    let parent = Arc::new(tenant_context());
    let child = ValidationContext::with_parent(parent).with("request_id", 7u64);

    assert!(child.get::<Tenant>("tenant").is_some());
    assert_eq!(child.get::<u64>("request_id"), Some(&7));
    assert!(validate_with_context(&child, "root", &[not_reserved()]).is_err());
}
