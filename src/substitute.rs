//! Table-driven substitution: ordered cluster replacement, then per code
//! point translation.

// Generated by build.rs from data/*.json: one module per table set exposing
// `CLUSTERS` and `TRANSLATIONS`.
mod tables {
    include!(concat!(env!("OUT_DIR"), "/tables.rs"));
}

/// A pair of conversion tables sharing one pipeline shape.
#[derive(Clone, Copy)]
pub struct Table {
    /// Multi-character clusters, applied in order. Longer clusters come
    /// before the shorter ones they contain.
    pub clusters: &'static [(&'static str, &'static str)],
    pub translations: &'static phf::Map<char, &'static str>,
}

pub static GURU_LATN: Table = Table {
    clusters: tables::guru_latn::CLUSTERS,
    translations: &tables::guru_latn::TRANSLATIONS,
};

pub static GURU_ASCII: Table = Table {
    clusters: tables::guru_ascii::CLUSTERS,
    translations: &tables::guru_ascii::TRANSLATIONS,
};

impl Table {
    /// Replaces every non-overlapping occurrence of each cluster, one rule
    /// at a time in table order.
    pub fn replace_clusters(&self, input: &str) -> String {
        let mut out = input.to_string();
        for &(from, to) in self.clusters {
            if out.contains(from) {
                out = out.replace(from, to);
            }
        }
        out
    }

    /// Maps each code point through the translation table; unmapped code
    /// points are copied as-is.
    pub fn translate(&self, input: &str) -> String {
        // Most mappings are one or two Latin letters against three UTF-8 bytes
        // of Gurmukhi, so the input length is a good upper estimate.
        let mut out = String::with_capacity(input.len());

        // Copy ASCII runs in bulk; none of them appear in the tables.
        let bytes = input.as_bytes();
        let mut i = 0usize;
        while i < bytes.len() {
            if bytes[i].is_ascii() {
                let start = i;
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii() {
                    i += 1;
                }
                out.push_str(&input[start..i]);
                continue;
            }

            let Some(ch) = input[i..].chars().next() else { break };
            i += ch.len_utf8();
            match self.lookup(ch) {
                Some(s) => out.push_str(s),
                None => out.push(ch),
            }
        }
        out
    }

    #[inline]
    pub fn lookup(&self, ch: char) -> Option<&'static str> {
        self.translations.get(&ch).copied()
    }

    /// Cluster replacement followed by translation.
    pub fn apply(&self, input: &str) -> String {
        self.translate(&self.replace_clusters(input))
    }
}
