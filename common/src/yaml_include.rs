use std::error::Error;
use std::fs;
use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

const INCLUDE_DIRECTIVE: &str = "!include";

/// Loads a YAML file, resolving `!include <relative path>` lines first.
///
/// Included documents are merged in order, then the including file's own
/// content is merged on top, so local keys override included ones.
pub fn load_yaml_with_includes(path: &Path) -> Result<Yaml, Box<dyn Error>> {
    process_includes_recursive(path)
}

fn process_includes_recursive(path: &Path) -> Result<Yaml, Box<dyn Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let base_path = path.parent().unwrap_or(Path::new(""));

    let (includes, rest): (Vec<&str>, Vec<&str>) = contents
        .lines()
        .partition(|&line| line.trim().starts_with(INCLUDE_DIRECTIVE));

    let mut merged_includes: Option<Yaml> = None;
    for line in includes {
        let include_path = line.trim().trim_start_matches(INCLUDE_DIRECTIVE).trim();
        let included = process_includes_recursive(&base_path.join(include_path))?;
        merged_includes = Some(match merged_includes {
            Some(acc) => merge_yaml(&acc, &included),
            None => included,
        });
    }

    let merged_rest = YamlLoader::load_from_str(&rest.join("\n"))?
        .into_iter()
        .reduce(|acc, doc| merge_yaml(&acc, &doc))
        .unwrap_or(Yaml::Null);

    Ok(match (merged_includes, merged_rest) {
        (Some(includes), Yaml::Null) => includes,
        (Some(includes), rest) => merge_yaml(&includes, &rest),
        (None, rest) => rest,
    })
}

fn merge_yaml(base: &Yaml, override_yaml: &Yaml) -> Yaml {
    match (base, override_yaml) {
        (Yaml::Hash(base_hash), Yaml::Hash(override_hash)) => {
            let mut result = base_hash.clone();
            for (key, value) in override_hash {
                let merged = match base_hash.get(key) {
                    Some(base_value) => merge_yaml(base_value, value),
                    None => value.clone(),
                };
                result.insert(key.clone(), merged);
            }
            Yaml::Hash(result)
        }
        (_, override_value) => override_value.clone(),
    }
}
