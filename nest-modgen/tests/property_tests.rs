//! Property-based tests for nest-modgen.
//!
//! Properties tested:
//! - Property 1: Naming Idempotence
//! - Property 2: Parser Round-Trip
//! - Property 3: Generation Determinism
//! - Property 4: Composite Identity Propagation
//! - Property 5: Capability Classification

use proptest::prelude::*;

use nest_modgen::{
    generator::{generate_module, ArtifactKind, GeneratorConfig},
    ir::Capability,
    naming::{to_camel_case, to_kebab_case, to_pascal_case},
    parser::SchemaParser,
};

// =============================================================================
// Generators for property tests
// =============================================================================

const SCALARS: [&str; 7] = [
    "String", "Int", "Boolean", "DateTime", "Decimal", "BigInt", "Json",
];

/// Generate a model name.
fn arb_model_name() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,12}"
}

/// Generate a field name.
fn arb_field_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,12}"
}

/// Generate one field declaration line: `<name> <Scalar>[?]`.
fn arb_field() -> impl Strategy<Value = (String, String)> {
    (
        arb_field_name(),
        prop::sample::select(SCALARS.to_vec()),
        any::<bool>(),
    )
        .prop_map(|(name, ty, optional)| {
            let line = format!("{} {}{}", name, ty, if optional { "?" } else { "" });
            (name, line)
        })
}

/// Generate a model block with its expected field names.
fn arb_model() -> impl Strategy<Value = (String, Vec<String>, String)> {
    (arb_model_name(), prop::collection::vec(arb_field(), 0..8)).prop_map(|(name, fields)| {
        let mut block = format!("model {} {{\n  id Int @id\n", name);
        let mut names = vec!["id".to_string()];
        for (field, line) in fields {
            block.push_str("  ");
            block.push_str(&line);
            block.push('\n');
            names.push(field);
        }
        block.push_str("}\n");
        (name, names, block)
    })
}

// =============================================================================
// Property 1: Naming Idempotence
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_naming_idempotence(name in "[a-zA-Z][a-zA-Z0-9]{0,20}") {
        let kebab = to_kebab_case(&name);
        prop_assert_eq!(to_kebab_case(&kebab), kebab.clone());

        let pascal = to_pascal_case(&name);
        prop_assert_eq!(to_pascal_case(&pascal), pascal.clone());

        let camel = to_camel_case(&name);
        prop_assert_eq!(to_camel_case(&camel), camel.clone());
    }

    #[test]
    fn prop_kebab_is_lowercase(name in "[a-zA-Z][a-zA-Z0-9]{0,20}") {
        let kebab = to_kebab_case(&name);
        prop_assert!(!kebab.chars().any(|c| c.is_ascii_uppercase()));
        prop_assert_eq!(kebab.replace('-', ""), name.to_lowercase());
    }
}

// =============================================================================
// Property 2: Parser Round-Trip
//
// N well-formed model blocks yield N models in source order, each with its
// fields in declaration order.
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_parser_round_trip(models in prop::collection::vec(arb_model(), 1..6)) {
        let source: String = models
            .iter()
            .map(|(_, _, block)| block.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let schema = SchemaParser::new().parse(&source);
        prop_assert!(schema.diagnostics.is_empty(), "{:?}", schema.diagnostics);
        prop_assert_eq!(schema.models.len(), models.len());

        for (model, (name, fields, _)) in schema.models.iter().zip(&models) {
            prop_assert_eq!(model.name(), name.as_str());
            let parsed: Vec<_> = model.fields().iter().map(|f| f.name.clone()).collect();
            prop_assert_eq!(&parsed, fields);
        }
    }
}

// =============================================================================
// Property 3: Generation Determinism
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_generation_is_deterministic((_, _, block) in arb_model()) {
        let config = GeneratorConfig::default();

        let first = SchemaParser::new().parse(&block);
        let second = SchemaParser::new().parse(&block);

        let a = generate_module(&first.models[0], &config);
        let b = generate_module(&second.models[0], &config);
        prop_assert_eq!(a, b);
    }
}

// =============================================================================
// Property 4: Composite Identity Propagation
//
// A basic model with `@@id([a, b])` takes both fields, in order, in every
// generated signature that addresses one record.
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_composite_identity_propagates(
        name in arb_model_name(),
        first in "[a-z]{1,8}Id",
        second in "[a-z]{1,8}Ref",
    ) {
        let source = format!(
            "model {} {{\n  {} Int\n  {} Int\n  @@id([{}, {}])\n}}\n",
            name, first, second, first, second
        );
        let schema = SchemaParser::new().parse(&source);
        let model = &schema.models[0];
        prop_assert_eq!(model.capability(), Capability::Basic);

        let params = format!("{}: number, {}: number", first, second);
        let key = format!("{}_{}: {{ {}, {} }}", first, second, first, second);
        let route = format!(":{}/:{}", first, second);

        for file in generate_module(model, &GeneratorConfig::default()) {
            match file.kind {
                ArtifactKind::Repository => {
                    prop_assert!(file.content.contains(&params));
                    prop_assert!(file.content.contains(&key));
                }
                ArtifactKind::Service => {
                    prop_assert!(file.content.contains(&params));
                    let call_args = format!("({}, {}", first, second);
                    prop_assert!(file.content.contains(&call_args));
                }
                ArtifactKind::Controller => {
                    prop_assert!(file.content.contains(&route));
                    let call_args = format!("({}, {}", first, second);
                    prop_assert!(file.content.contains(&call_args));
                }
                _ => {}
            }
        }
    }
}

// =============================================================================
// Property 5: Capability Classification
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_capability_follows_markers(
        created in any::<bool>(),
        updated in any::<bool>(),
        deleted in any::<bool>(),
    ) {
        let mut source = String::from("model Thing {\n  id Int @id\n");
        if created {
            source.push_str("  createdAt DateTime\n");
        }
        if updated {
            source.push_str("  updatedAt DateTime\n");
        }
        if deleted {
            source.push_str("  deletedAt DateTime?\n");
        }
        source.push_str("}\n");

        let schema = SchemaParser::new().parse(&source);
        let model = &schema.models[0];

        prop_assert_eq!(model.has_timestamps(), created && updated);
        prop_assert_eq!(model.has_soft_delete(), deleted);
        let expected = if created && updated && deleted {
            Capability::Rich
        } else {
            Capability::Basic
        };
        prop_assert_eq!(model.capability(), expected);
    }
}
