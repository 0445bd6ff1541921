//! TypeScript source of the runtime `types` module.

use mstgen_codegen::builder::CodeBuilder;

use super::INVALID_TIMESTAMP;

/// Render a module exporting `types`: every member of `base_module`'s
/// namespace, with `Date` replaced by the timestamp-normalizing scalar.
///
/// Generated models import from this module when the module reference
/// points at it. The helper types used by `Convert` are re-exported too.
pub fn runtime_module_source(base_module: &str) -> String {
    let message = format!(
        "  : `'${{snapshot}}' {}`;",
        INVALID_TIMESTAMP
    );

    CodeBuilder::typescript()
        .line(&format!(
            "import {{ types as baseTypes }} from \"{}\";",
            base_module
        ))
        .blank()
        .line(&format!(
            "export type {{ Instance, SnapshotIn, SnapshotOut }} from \"{}\";",
            base_module
        ))
        .blank()
        .line("type DateSnapshot = string | number | null;")
        .line("type DateValue = Date | null;")
        .blank()
        .block_with_close(
            "function isNumericString(value: unknown): value is string {",
            "}",
            |b| b.line("return typeof value === \"string\" && /^[\\d.]+$/.test(value);"),
        )
        .blank()
        .line("/**")
        .line(" * Milliseconds from a date literal or a unix timestamp in seconds.")
        .line(" */")
        .block_with_close(
            "function normalizeTimestampMs(snapshot: DateSnapshot): number | null {",
            "}",
            |b| {
                b.block_with_close("if (typeof snapshot === \"string\") {", "}", |b| {
                    b.block_with_close("if (isNumericString(snapshot)) {", "}", |b| {
                        b.line("return parseFloat(snapshot) * 1000;")
                    })
                    .line("return Date.parse(snapshot);")
                })
                .block_with_close("if (typeof snapshot === \"number\") {", "}", |b| {
                    b.line("return snapshot * 1000;")
                })
                .line("return null;")
            },
        )
        .blank()
        .block_with_close(
            "export const DateType = baseTypes.custom<DateSnapshot, DateValue>({",
            "});",
            |b| {
                b.line("name: \"Date\",")
                    .block_with_close("fromSnapshot(snapshot: DateSnapshot): DateValue {", "},", |b| {
                        b.line("const ms = normalizeTimestampMs(snapshot);")
                            .line("return ms === null ? null : new Date(ms);")
                    })
                    .block_with_close("toSnapshot(value: DateValue): string | null {", "},", |b| {
                        b.line("return value ? value.toISOString() : null;")
                    })
                    .block_with_close(
                        "isTargetType(value: DateSnapshot | DateValue): boolean {",
                        "},",
                        |b| b.line("return value instanceof Date || value === null;"),
                    )
                    .block_with_close(
                        "getValidationMessage(snapshot: DateSnapshot): string {",
                        "},",
                        |b| {
                            b.line("const ms = normalizeTimestampMs(snapshot);")
                                .line("return ms === null || isFinite(ms)")
                                .line("  ? \"\"")
                                .line(&message)
                        },
                    )
            },
        )
        .blank()
        .block_with_close("export const types = {", "};", |b| {
            b.line("...baseTypes,").line("Date: DateType,")
        })
        .build()
}
