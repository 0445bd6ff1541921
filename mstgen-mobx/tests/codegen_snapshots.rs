//! Snapshot tests for generated models files.
//!
//! Whole-file output is checked with inline snapshots. Run
//! `cargo insta review` to update them after intentional changes.

use mstgen_codegen::naming::{Namer, TS_TYPE_NAMING};
use mstgen_core::AcronymStyle;
use mstgen_graph::{GraphBuilder, TransformedKind, TypeGraph, TypeNames};
use mstgen_mobx::{ConverterScope, Generator, PropertyNaming, RendererConfig};

fn generate(graph: &TypeGraph, config: RendererConfig) -> String {
    Generator::new(graph, &config)
        .generate()
        .expect("generation failed")
}

fn just_types() -> RendererConfig {
    RendererConfig {
        just_types: true,
        ..RendererConfig::default()
    }
}

fn product_graph() -> TypeGraph {
    let mut b = GraphBuilder::new();
    let product = b.class("Product");
    let string = b.string();
    let integer = b.integer();
    let tags = b.array(string);
    b.property(product, "name", string)
        .property(product, "count", integer)
        .optional_property(product, "tags", tags)
        .top_level("Product", product);
    b.build().expect("valid graph")
}

#[test]
fn test_top_level_with_converters() {
    let code = generate(&product_graph(), RendererConfig::default());
    insta::assert_snapshot!(code, @r#"
    import { types } from "mobx-state-tree";
    import type { SnapshotIn, SnapshotOut } from "mobx-state-tree";

    // To parse this data:
    //
    //   import { Convert, Product } from "./file";
    //
    //   const product = Convert.toProduct(json);

    export const Product = types.model("Product", {
      name: types.string,
      count: types.number,
      tags: types.maybe(types.array(types.string)),
    });

    export class Convert {
      public static toProduct(json: string): SnapshotIn<typeof Product> {
        return JSON.parse(json);
      }

      public static productToJson(value: SnapshotOut<typeof Product>): string {
        return JSON.stringify(value);
      }
    }
    "#);
}

#[test]
fn test_dependencies_before_dependents_and_late_back_edges() {
    let mut b = GraphBuilder::new();
    let order = b.class("Order");
    let customer = b.class("Customer");
    let line = b.class("Line");
    let string = b.string();
    let integer = b.integer();
    let double = b.double();
    let lines = b.array(line);
    b.property(customer, "name", string)
        .property(line, "order", order)
        .property(line, "qty", double)
        .property(order, "id", integer)
        .property(order, "customer", customer)
        .property(order, "lines", lines)
        .top_level("Order", order);
    let graph = b.build().expect("valid graph");

    insta::assert_snapshot!(generate(&graph, just_types()), @r#"
    import { types } from "mobx-state-tree";

    export const Customer = types.model("Customer", {
      name: types.string,
    });

    export const Line = types.model("Line", {
      order: types.late(() => Order),
      qty: types.number,
    });

    export const Order = types.model("Order", {
      id: types.number,
      customer: Customer,
      lines: types.array(Line),
    });
    "#);
}

#[test]
fn test_enums_docs_unions_and_quoted_keys() {
    let mut b = GraphBuilder::new();
    let product = b.class("Product");
    let status = b.enumeration("Status", ["draft", "pending", "wc-on-hold"]);
    let s1 = b.string();
    let s2 = b.string();
    let double = b.double();
    let null = b.null();
    let price = b.union([s1, s2, double, null]);
    let created = b.transformed(TransformedKind::DateTime);
    b.property(product, "status", status)
        .property(product, "unit-price", price)
        .optional_property(product, "date_created", created)
        .describe_property(product, "status", "Publication status.")
        .describe(product, "A product.")
        .top_level("Product", product);
    let graph = b.build().expect("valid graph");

    insta::assert_snapshot!(generate(&graph, just_types()), @r#"
    import { types } from "mobx-state-tree";

    export enum Status {
      Draft = "draft",
      Pending = "pending",
      WcOnHold = "wc-on-hold",
    }

    /**
     * A product.
     */
    export const Product = types.model("Product", {
      /**
       * Publication status.
       */
      status: types.enumeration<Status>("Status", Object.values(Status)),
      "unit-price": types.union(types.string, types.number, types.null),
      date_created: types.maybe(types.Date),
    });
    "#);
}

#[test]
fn test_unions_declared_separately() {
    let mut b = GraphBuilder::new();
    let holder = b.class("Holder");
    let string = b.string();
    let integer = b.integer();
    let boolean = b.bool();
    let null = b.null();
    let value = b.union([string, integer]);
    let flag = b.union([boolean, null]);
    b.names(value, TypeNames::given("StringOrNumber"))
        .property(holder, "value", value)
        .property(holder, "flag", flag)
        .top_level("Holder", holder);
    let graph = b.build().expect("valid graph");

    let config = RendererConfig {
        declare_unions_separately: true,
        ..just_types()
    };
    insta::assert_snapshot!(generate(&graph, config), @r#"
    import { types } from "mobx-state-tree";

    export const StringOrNumber = types.union(types.string, types.number);

    export const Holder = types.model("Holder", {
      value: StringOrNumber,
      flag: types.union(types.boolean, types.null),
    });
    "#);
}

#[test]
fn test_unions_inline_by_default() {
    let mut b = GraphBuilder::new();
    let holder = b.class("Holder");
    let string = b.string();
    let integer = b.integer();
    let value = b.union([string, integer]);
    b.names(value, TypeNames::given("StringOrNumber"))
        .property(holder, "value", value);
    let graph = b.build().expect("valid graph");

    let code = generate(&graph, just_types());
    assert!(!code.contains("StringOrNumber"));
    assert!(code.contains("  value: types.union(types.string, types.number),"));
}

#[test]
fn test_all_objects_with_runtime_checking() {
    let mut b = GraphBuilder::new();
    let item = b.class("Item");
    let string = b.string();
    let items = b.array(item);
    b.property(item, "name", string).top_level("Items", items);
    let graph = b.build().expect("valid graph");

    let config = RendererConfig {
        runtime_type_checking: true,
        converters: ConverterScope::AllObjects,
        ..RendererConfig::default()
    };
    insta::assert_snapshot!(generate(&graph, config), @r#"
    import { types } from "mobx-state-tree";
    import type { Instance } from "mobx-state-tree";

    // To parse this data:
    //
    //   import { Convert, Item } from "./file";
    //
    //   const item = Convert.toItem(json);
    //
    // These functions will throw an error if the JSON doesn't
    // match the expected interface, even if the JSON is valid.

    export const Item = types.model("Item", {
      name: types.string,
    });

    export const Items = types.array(Item);

    export class Convert {
      public static toItem(json: string): Instance<typeof Item> {
        return Item.create(JSON.parse(json));
      }

      public static itemToJson(value: Instance<typeof Item>): string {
        return JSON.stringify(value);
      }
    }
    "#);
}

#[test]
fn test_top_level_scope_includes_aliases() {
    let mut b = GraphBuilder::new();
    let item = b.class("Item");
    let string = b.string();
    let items = b.array(item);
    b.property(item, "name", string)
        .top_level("Items", items)
        .top_level("Item", item);
    let graph = b.build().expect("valid graph");

    let code = generate(&graph, RendererConfig::default());
    assert!(code.contains("//   import { Convert, Items, Item } from \"./file\";"));
    assert!(code.contains("//   const items = Convert.toItems(json);"));
    assert!(code.contains("public static toItems(json: string): SnapshotIn<typeof Items> {"));
    assert!(code.contains("public static itemToJson(value: SnapshotOut<typeof Item>): string {"));
}

#[test]
fn test_nice_property_names_and_custom_module() {
    let mut b = GraphBuilder::new();
    let user = b.class("User");
    let string = b.string();
    let integer = b.integer();
    b.property(user, "user_name", string)
        .property(user, "userName", string)
        .property(user, "ID", integer)
        .top_level("User", user);
    let graph = b.build().expect("valid graph");

    let config = RendererConfig {
        property_naming: PropertyNaming::Nice,
        module_reference: "./types".to_string(),
        ..just_types()
    };
    insta::assert_snapshot!(generate(&graph, config), @r#"
    import { types } from "./types";

    export const User = types.model("User", {
      userName: types.string,
      userName2: types.string,
      id: types.number,
    });
    "#);
}

#[test]
fn test_just_types_has_no_helpers() {
    let code = generate(&product_graph(), just_types());
    assert!(!code.contains("Convert"));
    assert!(!code.contains("import type"));
    assert!(!code.contains("// To parse this data:"));
}

#[test]
fn test_generated_lines_match_text() {
    let graph = product_graph();
    let generator = Generator::new(&graph, &RendererConfig::default());
    let lines = generator.generate_lines().expect("generation failed");
    let text = generator.generate().expect("generation failed");
    assert_eq!(lines.join("\n") + "\n", text);
}

#[test]
fn test_graph_loaded_from_json() {
    let src = r#"{
        "topLevels": [{ "name": "Event", "type": 2 }],
        "types": [
            { "kind": "transformed", "format": "date-time" },
            { "kind": "map", "values": 0 },
            {
                "kind": "object",
                "names": ["event"],
                "description": "Something that happened.",
                "properties": {
                    "at": { "type": 0 },
                    "meta": { "type": 1, "optional": true }
                }
            }
        ]
    }"#;
    let graph = TypeGraph::from_json_str(src, "event.json").expect("valid graph");

    insta::assert_snapshot!(generate(&graph, just_types()), @r#"
    import { types } from "mobx-state-tree";

    /**
     * Something that happened.
     */
    export const Event = types.model("Event", {
      at: types.Date,
      meta: types.maybe(types.frozen()),
    });
    "#);
}

#[test]
fn test_interning_is_idempotent() {
    let mut namer = Namer::new();
    let first = namer.intern("product", ["Product"], 10);
    let second = namer.intern("product", ["Other"], 1);
    assert_eq!(first, second);
    assert_eq!(namer.len(), 1);

    let names = namer.assign(&TS_TYPE_NAMING, AcronymStyle::Pascal);
    assert_eq!(names.resolve(first), Some("Product"));
}

#[test]
fn test_pass_through_marshal_round_trip() {
    let mut b = GraphBuilder::new();
    let product = b.class("Product");
    let string = b.string();
    let integer = b.integer();
    b.property(product, "name", string)
        .optional_property(product, "count", integer)
        .top_level("Product", product);
    let graph = b.build().expect("valid graph");

    let code = generate(&graph, RendererConfig::default());
    assert!(code.contains("  count: types.maybe(types.number),\n"));

    // Decoding is JSON.parse and encoding is JSON.stringify, with nothing
    // in between that could drop or rename a field
    let convert = &code[code.find("export class Convert {").expect("Convert class")..];
    insta::assert_snapshot!(convert, @r#"
    export class Convert {
      public static toProduct(json: string): SnapshotIn<typeof Product> {
        return JSON.parse(json);
      }

      public static productToJson(value: SnapshotOut<typeof Product>): string {
        return JSON.stringify(value);
      }
    }
    "#);

    let json = r#"{"name":"x","count":5}"#;
    let decoded: serde_json::Value = serde_json::from_str(json).unwrap();
    let again: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&decoded).unwrap()).unwrap();
    assert_eq!(again["name"], "x");
    assert_eq!(again["count"], 5);
}
