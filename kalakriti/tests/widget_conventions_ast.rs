use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{ImplItem, Item, UseTree, Visibility};

const REQUIRED_WIDGET_FILES: [&str; 5] =
    ["mod.rs", "event.rs", "model.rs", "reducer.rs", "state.rs"];
const REQUIRED_WIDGET_METHODS: [&str; 3] = ["new", "reduce", "vm"];

#[test]
fn given_widgets_dir_when_validating_conventions_then_all_widgets_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        if let Item::Mod(item_mod) = item {
            if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                declared_modules.insert(item_mod.ident.to_string());
            } else {
                violations.push(format!(
                    "{}: module declaration '{}' must be pub(crate) mod <name>;",
                    mod_rs.display(),
                    item_mod.ident
                ));
            }
        }
    }

    let mut fs_modules = BTreeSet::new();
    let entries = fs::read_dir(&widgets_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", widgets_dir.display())
    });
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();
        if path.is_dir() {
            fs_modules.insert(entry.file_name().to_string_lossy().to_string());
        } else if path.file_name().is_some_and(|name| name != "mod.rs") {
            violations.push(format!(
                "{}: widgets live in their own directory",
                path.display()
            ));
        }
    }

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match widget directories {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        validate_widget_dir(&widgets_dir.join(module), module, &mut violations);
    }

    for file in rust_files(&widgets_dir) {
        validate_imports(&file, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget_dir(dir: &Path, module: &str, violations: &mut Vec<String>) {
    let prefix = snake_to_pascal_case(module);

    for required in REQUIRED_WIDGET_FILES {
        if !dir.join(required).is_file() {
            violations.push(format!(
                "{}: missing {required}",
                dir.display()
            ));
        }
    }

    let mod_rs = dir.join("mod.rs");
    if mod_rs.is_file() {
        validate_widget_struct(&mod_rs, &prefix, violations);
    }

    let event_rs = dir.join("event.rs");
    if event_rs.is_file() {
        let file = parse(&event_rs);
        let enums: BTreeSet<String> = file
            .items
            .iter()
            .filter_map(|item| match item {
                Item::Enum(item_enum) => Some(item_enum.ident.to_string()),
                _ => None,
            })
            .collect();
        for suffix in ["Intent", "Effect", "Event"] {
            let expected = format!("{prefix}{suffix}");
            if !enums.contains(&expected) {
                violations.push(format!(
                    "{}: expected enum {expected}",
                    event_rs.display()
                ));
            }
        }
    }

    for side_effect_free in ["reducer.rs", "state.rs", "model.rs"] {
        let path = dir.join(side_effect_free);
        let Ok(source) = fs::read_to_string(&path) else {
            continue;
        };
        for forbidden in ["crate::app", "crate::state", "crate::routers"] {
            if source.contains(forbidden) {
                violations.push(format!(
                    "{}: widgets must not depend on {forbidden}",
                    path.display()
                ));
            }
        }
        for forbidden in ["std::fs::", "std::process::Command", "Instant::now"]
        {
            if source.contains(forbidden) {
                violations.push(format!(
                    "{}: forbidden side-effect pattern detected: {forbidden}",
                    path.display()
                ));
            }
        }
    }

    let view_dir = dir.join("view");
    if view_dir.is_dir() {
        for file in rust_files(&view_dir) {
            if file.file_name().is_some_and(|name| name != "mod.rs") {
                validate_view_file(&file, violations);
            }
        }
    }
}

fn validate_widget_struct(
    mod_rs: &Path,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    let file = parse(mod_rs);
    let widget_name = format!("{prefix}Widget");

    let has_struct = file.items.iter().any(|item| {
        matches!(item, Item::Struct(item_struct)
            if item_struct.ident == widget_name
                && is_pub_crate(&item_struct.vis))
    });
    if !has_struct {
        violations.push(format!(
            "{}: expected pub(crate) struct {widget_name}",
            mod_rs.display()
        ));
        return;
    }

    let mut methods = BTreeSet::new();
    for item in &file.items {
        let Item::Impl(item_impl) = item else {
            continue;
        };
        let syn::Type::Path(self_ty) = item_impl.self_ty.as_ref() else {
            continue;
        };
        if !self_ty.path.is_ident(&widget_name) {
            continue;
        }
        for impl_item in &item_impl.items {
            if let ImplItem::Fn(method) = impl_item {
                if is_pub_crate(&method.vis) {
                    methods.insert(method.sig.ident.to_string());
                }
            }
        }
    }

    for required in REQUIRED_WIDGET_METHODS {
        if !methods.contains(required) {
            violations.push(format!(
                "{}: {widget_name} must expose pub(crate) fn {required}",
                mod_rs.display()
            ));
        }
    }
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let file = parse(file_path);
    let expected_prefix = file_stem_pascal_case(file_path);

    let has_view = file.items.iter().any(|item| {
        matches!(item, Item::Fn(item_fn)
            if item_fn.sig.ident == "view" && is_pub_crate(&item_fn.vis))
    });
    if !has_view {
        return;
    }

    let props: Vec<String> = file
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Struct(item_struct)
                if item_struct.ident.to_string().ends_with("Props") =>
            {
                Some(item_struct.ident.to_string())
            },
            _ => None,
        })
        .collect();

    if props.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type next to view, found {}",
            file_path.display(),
            props.len()
        ));
    }
    for name in props {
        if name != format!("{expected_prefix}Props") {
            violations.push(format!(
                "{}: props type '{name}' must be named '{expected_prefix}Props'",
                file_path.display()
            ));
        }
    }
}

fn validate_imports(file_path: &Path, violations: &mut Vec<String>) {
    let file = parse(file_path);
    for item in &file.items {
        if let Item::Use(item_use) = item {
            if use_tree_has_glob(&item_use.tree) {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            }
        }
    }
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    for entry in entries {
        let path = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
            .path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    files
}

fn parse(path: &Path) -> syn::File {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    });
    syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();
    snake_to_pascal_case(&stem)
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
