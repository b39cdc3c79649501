//! Hierarchy and catalog queries.
//!
//! With no flags, prints the component tree with the classes each component
//! owns. The flags expose the individual engine queries: descendant and
//! ancestor chains, classes per component, the component chain a class
//! touches, and a class's transitive prerequisite closure.

use clap::Args;
use colored::Colorize;

use crate::core::{FeatconfError, Result};
use crate::manifest::ResolvedCatalog;

/// Command to query the component hierarchy and class catalog.
#[derive(Args)]
pub struct ListCommand {
    /// Show classes owned directly by the given component
    #[arg(long, value_name = "COMPONENT")]
    classes_of: Option<String>,

    /// Show descendant chains of the given component, one per declared path
    #[arg(long, value_name = "COMPONENT")]
    children_of: Option<String>,

    /// Show ancestor chains of the given component, one per declared path
    #[arg(long, value_name = "COMPONENT")]
    parents_of: Option<String>,

    /// Show the root-to-owner component chain for the given class
    #[arg(long, value_name = "CLASS")]
    chain_of: Option<String>,

    /// Show the transitive prerequisite closure of the given class
    #[arg(long, value_name = "CLASS")]
    closure_of: Option<String>,
}

impl ListCommand {
    /// Run the selected query, or print the full catalog tree.
    pub fn execute(&self, catalog: &ResolvedCatalog) -> Result<()> {
        if let Some(component) = &self.classes_of {
            require_component(catalog, component)?;
            for class in catalog.classes.classes_of(component) {
                println!("{class}");
            }
        } else if let Some(component) = &self.children_of {
            require_component(catalog, component)?;
            for name in catalog.hierarchy.children_of(component) {
                println!("{name}");
            }
        } else if let Some(component) = &self.parents_of {
            require_component(catalog, component)?;
            for name in catalog.hierarchy.parents_of(component) {
                println!("{name}");
            }
        } else if let Some(class) = &self.chain_of {
            let chain = catalog.classes.component_chain_of(class, &catalog.hierarchy)?;
            println!("{}", chain.join("/"));
        } else if let Some(class) = &self.closure_of {
            for name in catalog.graph.closure_of(class)? {
                println!("{name}");
            }
        } else {
            print_tree(catalog);
        }
        Ok(())
    }
}

fn require_component(catalog: &ResolvedCatalog, name: &str) -> Result<()> {
    if catalog.hierarchy.contains(name) {
        Ok(())
    } else {
        Err(FeatconfError::UnknownComponent {
            name: name.to_string(),
        })
    }
}

/// Render the component tree with owned classes, e.g.
///
/// ```text
/// core (GoostEngine, LinkedList)
/// └── math (Random)
///     └── geometry (PolyNode2D)
/// ```
fn print_tree(catalog: &ResolvedCatalog) {
    let roots = catalog.hierarchy.roots();
    for (i, root) in roots.iter().enumerate() {
        let mut out = String::new();
        render_node(catalog, root, "", i + 1 == roots.len(), true, &mut out);
        print!("{out}");
    }
}

fn render_node(
    catalog: &ResolvedCatalog,
    component: &str,
    prefix: &str,
    is_last: bool,
    is_root: bool,
    out: &mut String,
) {
    let classes = catalog.classes.classes_of(component);
    let suffix = if classes.is_empty() {
        String::new()
    } else {
        format!(" ({})", classes.join(", ").dimmed())
    };
    if is_root {
        out.push_str(&format!("{}{suffix}\n", component.bold()));
    } else {
        let connector = if is_last { "└── " } else { "├── " };
        out.push_str(&format!("{prefix}{connector}{component}{suffix}\n"));
    }

    let children = catalog.hierarchy.direct_children_of(component);
    let child_prefix = if is_root {
        String::new()
    } else if is_last {
        format!("{prefix}    ")
    } else {
        format!("{prefix}│   ")
    };
    for (i, child) in children.iter().enumerate() {
        render_node(catalog, child, &child_prefix, i + 1 == children.len(), false, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;

    fn catalog() -> ResolvedCatalog {
        let manifest: Manifest = toml::from_str(
            r#"
components = ["core/math/geometry", "scene/physics"]

[classes]
GoostEngine = "core"
Random = "math"
PolyNode2D = "geometry"

[dependencies]
"#,
        )
        .unwrap();
        manifest.resolve().unwrap()
    }

    fn command() -> ListCommand {
        ListCommand {
            classes_of: None,
            children_of: None,
            parents_of: None,
            chain_of: None,
            closure_of: None,
        }
    }

    #[test]
    fn test_default_tree_runs() {
        command().execute(&catalog()).unwrap();
    }

    #[test]
    fn test_unknown_component_query_fails() {
        let cmd = ListCommand {
            classes_of: Some("gui".to_string()),
            ..command()
        };
        assert!(matches!(
            cmd.execute(&catalog()),
            Err(FeatconfError::UnknownComponent { .. })
        ));
    }

    #[test]
    fn test_chain_query_uses_catalog() {
        let cmd = ListCommand {
            chain_of: Some("PolyNode2D".to_string()),
            ..command()
        };
        cmd.execute(&catalog()).unwrap();
    }
}
