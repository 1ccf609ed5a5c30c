use std::env;
use std::fs;
use std::path::Path;

/// Table sets compiled into the crate: (data file stem, generated module name).
const TABLES: &[(&str, &str)] = &[("guru_latn", "guru_latn"), ("guru_ascii", "guru_ascii")];

fn main() {
    // Build script: reads the conversion tables from data/*.json and generates
    // `$OUT_DIR/tables.rs`, one module per table set, holding an ordered cluster
    // slice plus a phf map of code point -> replacement string.

    let crate_root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let data_dir = crate_root.join("data");
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set by cargo");

    println!("cargo:rerun-if-changed=build.rs");

    let mut generated = String::from("// Auto-generated by build.rs from data/*.json. Do not edit manually.\n");
    for (stem, module) in TABLES {
        let path = data_dir.join(format!("{stem}.json"));
        println!("cargo:rerun-if-changed={}", path.display());

        let json_text = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
        generated.push_str(&write_table_module(module, &json_text));
    }

    fs::write(Path::new(&out_dir).join("tables.rs"), generated).expect("failed to write tables.rs");
}

fn write_table_module(module: &str, json_text: &str) -> String {
    let v: serde_json::Value = match serde_json::from_str(json_text) {
        Ok(v) => v,
        Err(e) => panic!("invalid json in table {}: {}", module, e),
    };

    // Cluster rules keep file order: longer clusters are listed before the
    // shorter ones they contain.
    let mut clusters = String::new();
    let rules = v["replacements"].as_array().unwrap_or_else(|| panic!("{}: `replacements` must be an array", module));
    for rule in rules {
        let pair = rule.as_array().filter(|p| p.len() == 2).unwrap_or_else(|| panic!("{}: replacement rule must be a [from, to] pair", module));
        let from = pair[0].as_str().expect("replacement source must be a string");
        let to = pair[1].as_str().expect("replacement target must be a string");
        if from.is_empty() {
            panic!("{}: empty replacement source", module);
        }
        clusters.push_str(&format!("    ({:?}, {:?}),\n", from, to));
    }

    let mut entries = String::new();
    let map = v["translations"].as_object().unwrap_or_else(|| panic!("{}: `translations` must be an object", module));
    for (k, val) in map {
        let mut chars = k.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => panic!("{}: translation key {:?} must be exactly one code point", module, k),
        };
        let s = val.as_str().expect("expected string value in translation table");
        // Escape keys: most are combining marks that do not stand alone in a char literal.
        entries.push_str(&format!("        '\\u{{{:x}}}' => {:?},\n", ch as u32, s));
    }

    format!(
        r#"pub mod {module} {{
    use phf::phf_map;

    pub const CLUSTERS: &[(&str, &str)] = &[
{clusters}    ];

    pub static TRANSLATIONS: phf::Map<char, &'static str> = phf_map! {{
{entries}    }};
}}
"#,
        module = module,
        clusters = clusters,
        entries = entries
    )
}
