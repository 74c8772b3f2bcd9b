//! Placeholder interpolation and rendering of context values.

use flog::{Context, Dump, Render, interpolate};
use serde_json::json;

#[test]
fn no_context_leaves_message_alone() {
    assert_eq!(interpolate("plain {text}", &Context::new()), "plain {text}");
}

#[test]
fn scalar_placeholders_are_replaced() {
    let ctx = Context::new().with("user", "alice").with("id", 42);
    assert_eq!(interpolate("{user} has id {id}", &ctx), "alice has id 42");
}

#[test]
fn keys_may_hold_any_character_but_braces() {
    let ctx = Context::new()
        .with("user name", "alice")
        .with("order:id", 7)
        .with("город", "Москва");
    assert_eq!(
        interpolate("hi {user name} #{order:id} from {город}", &ctx),
        "hi alice #7 from Москва"
    );
}

#[test]
fn nested_braces_only_match_the_inner_pair() {
    let ctx = Context::new().with("id", 1);
    assert_eq!(interpolate("{{id}}", &ctx), "{1}");
}

#[test]
fn unused_keys_are_appended_in_order() {
    let ctx = Context::new()
        .with("user", "alice")
        .with("ip", "10.0.0.1")
        .with("attempt", 3);
    assert_eq!(
        interpolate("login by {user}", &ctx),
        "login by alice - ip: 10.0.0.1 - attempt: 3"
    );
}

#[test]
fn positional_values_are_appended() {
    let ctx = Context::new().push("first").push(2.5);
    assert_eq!(interpolate("values", &ctx), "values - first - 2.5");
}

#[test]
fn compound_values_never_fill_placeholders() {
    let ctx = Context::new().with("cart", json!(["apple", "pear"]));
    let body = interpolate("cart {cart}", &ctx);
    assert!(body.starts_with("cart {cart} - cart: ["));
    assert!(body.contains("\"apple\""));
}

#[test]
fn unknown_placeholder_is_left_untouched() {
    let ctx = Context::new().with("a", 1);
    assert_eq!(interpolate("{b}", &ctx), "{b} - a: 1");
}

#[test]
fn repeated_placeholder_uses_value_each_time() {
    let ctx = Context::new().with("x", "y");
    assert_eq!(interpolate("{x}{x}", &ctx), "yy");
}

#[test]
fn json_strings_render_bare() {
    assert_eq!(json!("hi").render(), "hi");
    assert_eq!(json!(7).render(), "7");
    assert_eq!(json!(null).render(), "");
    assert!(json!({"a": 1}).render().contains('\n'));
    assert!(!json!({"a": 1}).is_scalar());
}

#[test]
fn option_renders_inner_or_empty() {
    assert_eq!(Some(5).render(), "5");
    assert_eq!(None::<i32>.render(), "");
}

#[test]
fn dump_uses_pretty_debug() {
    #[derive(Debug)]
    struct Order {
        id: u32,
    }
    let dump = Dump(Order { id: 9 });
    assert!(!dump.is_scalar());
    assert_eq!(dump.render(), "Order {\n    id: 9,\n}");
}

#[test]
fn context_len() {
    let ctx = Context::new().with("a", 1).push(true);
    assert_eq!(ctx.len(), 2);
    assert!(!ctx.is_empty());
    assert!(Context::new().is_empty());
}
