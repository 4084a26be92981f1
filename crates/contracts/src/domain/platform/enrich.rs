//! Read-time enrichment of platform rows with format-mapping fields.

use std::collections::HashMap;

use crate::domain::format_mapping::aggregate::FormatMapping;
use crate::domain::platform::aggregate::Platform;

/// A platform row as shown in the grid: the record itself plus the box/brand
/// pair copied from the matching format mapping, when one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformRow {
    pub platform_id: String,
    pub platform: String,
    pub platform_name: String,
    pub standardized_name: String,
    pub content_box: Option<String>,
    pub marke: Option<String>,
}

impl PlatformRow {
    pub fn record(&self) -> Platform {
        Platform {
            platform_id: self.platform_id.clone(),
            platform: self.platform.clone(),
            platform_name: self.platform_name.clone(),
            standardized_name: self.standardized_name.clone(),
        }
    }
}

/// Left-joins `platforms` against `mappings` on `standardized_name`.
///
/// Every platform produces exactly one row whether or not a mapping matches;
/// mappings without a matching platform do not appear. Linear over both
/// inputs via a hash lookup.
pub fn enrich_platforms(platforms: Vec<Platform>, mappings: &[FormatMapping]) -> Vec<PlatformRow> {
    let by_name: HashMap<&str, &FormatMapping> = mappings
        .iter()
        .map(|m| (m.standardized_name.as_str(), m))
        .collect();

    platforms
        .into_iter()
        .map(|p| {
            let mapping = by_name.get(p.standardized_name.as_str()).copied();
            PlatformRow {
                content_box: mapping.map(|m| m.content_box.clone()),
                marke: mapping.map(|m| m.marke.clone()),
                platform_id: p.platform_id,
                platform: p.platform,
                platform_name: p.platform_name,
                standardized_name: p.standardized_name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(id: &str, standardized: &str) -> Platform {
        Platform {
            platform_id: id.to_string(),
            platform: "YouTube".to_string(),
            platform_name: format!("{id} channel"),
            standardized_name: standardized.to_string(),
        }
    }

    fn mapping(standardized: &str, content_box: &str, marke: &str) -> FormatMapping {
        FormatMapping {
            standardized_name: standardized.to_string(),
            content_box: content_box.to_string(),
            marke: marke.to_string(),
        }
    }

    #[test]
    fn matched_platforms_carry_the_mapping_fields() {
        let rows = enrich_platforms(
            vec![platform("P1", "A"), platform("P2", "B")],
            &[mapping("A", "X", "M")],
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].content_box.as_deref(), Some("X"));
        assert_eq!(rows[0].marke.as_deref(), Some("M"));
        assert_eq!(rows[1].content_box, None);
        assert_eq!(rows[1].marke, None);
    }

    #[test]
    fn no_platform_is_dropped_and_no_orphan_mapping_appears() {
        let rows = enrich_platforms(
            vec![platform("P1", "A")],
            &[mapping("A", "X", "M"), mapping("Z", "unused", "unused")],
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].platform_id, "P1");
    }

    #[test]
    fn output_is_invariant_under_mapping_order() {
        let platforms = vec![platform("P1", "A"), platform("P2", "B")];
        let forward = [mapping("A", "X", "M"), mapping("B", "Y", "N")];
        let reversed = [mapping("B", "Y", "N"), mapping("A", "X", "M")];
        assert_eq!(
            enrich_platforms(platforms.clone(), &forward),
            enrich_platforms(platforms, &reversed)
        );
    }

    #[test]
    fn empty_mapping_list_leaves_every_row_unenriched() {
        let rows = enrich_platforms(vec![platform("P1", "A")], &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].content_box, None);
        assert_eq!(rows[0].marke, None);
    }
}
