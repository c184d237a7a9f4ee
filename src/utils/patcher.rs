//! Idempotent line-oriented patches for generated project files.
//!
//! Every operation here is locate-or-append: find an anchor line in the
//! boilerplate our own templates produced, insert the missing line after it,
//! and degrade to "append at end" or "skip" when the anchor is gone. Existing
//! content is never removed or reordered (the `__all__` line excepted, which
//! is always regenerated wholesale).

use std::sync::LazyLock;

use regex::Regex;

static AGGREGATOR_IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^from \.\w+ import (\w+)").unwrap());

/// The exact lines `register_router` maintains in `app/main.py`.
fn router_lines(name: &str) -> (String, String) {
    (
        format!("from app.routers import {}", name),
        format!("app.include_router({}.router)", name),
    )
}

/// Check whether both the import and the inclusion call for a router are
/// already present verbatim in the entry-point source.
pub fn router_registered(content: &str, name: &str) -> bool {
    let (import_line, include_line) = router_lines(name);
    content.contains(&import_line) && content.contains(&include_line)
}

/// Insert the import and inclusion lines for a router into the entry-point
/// source, each only if missing.
///
/// The import goes after the last existing `from app.routers import` line,
/// falling back to the line after the first `FastAPI` mention, falling back
/// to the top of the file. The inclusion call goes after the first line whose
/// trimmed form starts with `app =`, falling back to the end of the file.
pub fn register_router(content: &str, name: &str) -> String {
    let (import_line, include_line) = router_lines(name);
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();

    if !content.contains(&import_line) {
        let insert_at = match lines
            .iter()
            .rposition(|l| l.trim_start().starts_with("from app.routers import"))
        {
            Some(idx) => idx + 1,
            None => lines
                .iter()
                .position(|l| l.contains("FastAPI"))
                .map(|idx| idx + 1)
                .unwrap_or(0),
        };
        lines.insert(insert_at, import_line);
    }

    if !content.contains(&include_line) {
        match lines.iter().position(|l| l.trim_start().starts_with("app =")) {
            Some(idx) => lines.insert(idx + 1, include_line),
            None => lines.push(include_line),
        }
    }

    let mut result = lines.join("\n");
    result.push('\n');
    result
}

/// Rebuild the models aggregator (`app/models/__init__.py`) with an import
/// line for `name` and a regenerated `__all__` declaration.
///
/// The `__all__` line is always a pure function of the import lines present,
/// so it can never drift out of sync with them. Passing the current content
/// back through this function is a no-op.
pub fn update_aggregator(content: &str, name: &str) -> String {
    let import_line = format!("from .{name} import {name}");
    let mut lines: Vec<String> = content.trim().lines().map(str::to_string).collect();

    if !lines.iter().any(|l| *l == import_line) {
        lines.push(import_line);
    }

    let exported: Vec<String> = lines
        .iter()
        .filter_map(|l| AGGREGATOR_IMPORT_RE.captures(l))
        .map(|caps| caps[1].to_string())
        .collect();

    lines.retain(|l| !l.trim_start().starts_with("__all__"));
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    let quoted: Vec<String> = exported.iter().map(|n| format!("\"{}\"", n)).collect();
    lines.push(String::new());
    lines.push(format!("__all__ = [{}]", quoted.join(", ")));

    format!("{}\n", lines.join("\n").trim())
}

/// Check whether the Alembic revision template already imports sqlmodel.
pub fn sqlmodel_import_present(content: &str) -> bool {
    content.contains("import sqlmodel")
}

/// Insert `import sqlmodel` into Alembic's `script.py.mako` right after its
/// `from typing import Sequence, Union` line.
///
/// Returns `None` when the anchor line is missing, in which case the template
/// is left untouched. The anchor is Alembic boilerplate and may change across
/// Alembic versions; a silent skip is the accepted outcome.
pub fn inject_sqlmodel_import(content: &str) -> Option<String> {
    let lines: Vec<&str> = content.lines().collect();
    let anchor = lines
        .iter()
        .position(|l| l.trim_start().starts_with("from typing import Sequence, Union"))?;

    let mut updated: Vec<&str> = lines.clone();
    updated.insert(anchor + 1, "import sqlmodel");

    let mut result = updated.join("\n");
    if content.ends_with('\n') {
        result.push('\n');
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAIN_PY: &str = "\
from fastapi import FastAPI
from contextlib import asynccontextmanager
from app.database import create_db_and_tables, engine


@asynccontextmanager
async def lifespan(app: FastAPI):
    create_db_and_tables()
    yield


app = FastAPI(lifespan=lifespan)


@app.get(\"/\")
async def root():
    return {\"message\": \"Hello from FastAPI\"}
";

    #[test]
    fn test_register_router_inserts_both_lines() {
        let result = register_router(MAIN_PY, "Widget");
        assert!(result.contains("from app.routers import Widget"));
        assert!(result.contains("app.include_router(Widget.router)"));
        assert!(router_registered(&result, "Widget"));
    }

    #[test]
    fn test_register_router_import_after_fastapi_line() {
        let result = register_router(MAIN_PY, "Widget");
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines[0], "from fastapi import FastAPI");
        assert_eq!(lines[1], "from app.routers import Widget");
    }

    #[test]
    fn test_register_router_include_after_app_assignment() {
        let result = register_router(MAIN_PY, "Widget");
        let lines: Vec<&str> = result.lines().collect();
        let app_idx = lines
            .iter()
            .position(|l| l.starts_with("app = FastAPI"))
            .unwrap();
        assert_eq!(lines[app_idx + 1], "app.include_router(Widget.router)");
    }

    #[test]
    fn test_register_router_second_router_after_last_import() {
        let once = register_router(MAIN_PY, "Widget");
        let twice = register_router(&once, "Gadget");
        let lines: Vec<&str> = twice.lines().collect();
        let widget_idx = lines
            .iter()
            .position(|l| *l == "from app.routers import Widget")
            .unwrap();
        assert_eq!(lines[widget_idx + 1], "from app.routers import Gadget");
    }

    #[test]
    fn test_register_router_idempotent() {
        let once = register_router(MAIN_PY, "Widget");
        let twice = register_router(&once, "Widget");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_register_router_preserves_existing_content() {
        let result = register_router(MAIN_PY, "Widget");
        for line in MAIN_PY.lines() {
            assert!(result.contains(line), "lost line: {}", line);
        }
    }

    #[test]
    fn test_register_router_no_app_assignment_appends_include() {
        let content = "from fastapi import FastAPI\n";
        let result = register_router(content, "Widget");
        assert!(result.ends_with("app.include_router(Widget.router)\n"));
    }

    #[test]
    fn test_register_router_no_anchors_at_all() {
        let content = "x = 1\n";
        let result = register_router(content, "Widget");
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines[0], "from app.routers import Widget");
        assert_eq!(lines.last().unwrap(), &"app.include_router(Widget.router)");
        assert!(result.contains("x = 1"));
    }

    #[test]
    fn test_register_router_partial_state_completes_missing_line() {
        // Hand-edited file that kept the import but lost the inclusion call
        let content = "from fastapi import FastAPI\nfrom app.routers import Widget\napp = FastAPI()\n";
        let result = register_router(content, "Widget");
        assert_eq!(result.matches("from app.routers import Widget").count(), 1);
        assert_eq!(result.matches("app.include_router(Widget.router)").count(), 1);
    }

    #[test]
    fn test_update_aggregator_from_empty() {
        let result = update_aggregator("", "Widget");
        assert_eq!(
            result,
            "from .Widget import Widget\n\n__all__ = [\"Widget\"]\n"
        );
    }

    #[test]
    fn test_update_aggregator_appends_second_model() {
        let first = update_aggregator("", "Widget");
        let second = update_aggregator(&first, "Gadget");
        assert!(second.contains("from .Widget import Widget"));
        assert!(second.contains("from .Gadget import Gadget"));
        assert!(second.contains("__all__ = [\"Widget\", \"Gadget\"]"));
    }

    #[test]
    fn test_update_aggregator_idempotent() {
        let once = update_aggregator("", "Widget");
        let twice = update_aggregator(&once, "Widget");
        assert_eq!(once, twice);
        assert_eq!(twice.matches("from .Widget import Widget").count(), 1);
    }

    #[test]
    fn test_update_aggregator_regenerates_stale_all() {
        // A hand-edited __all__ listing a model with no import line
        let content = "from .Widget import Widget\n\n__all__ = [\"Widget\", \"Ghost\"]\n";
        let result = update_aggregator(content, "Gadget");
        assert!(!result.contains("Ghost"));
        assert!(result.contains("__all__ = [\"Widget\", \"Gadget\"]"));
        assert_eq!(result.matches("__all__").count(), 1);
    }

    #[test]
    fn test_update_aggregator_single_all_line() {
        let mut content = String::new();
        for name in ["A", "B", "C"] {
            content = update_aggregator(&content, name);
        }
        assert_eq!(content.matches("__all__").count(), 1);
        assert!(content.contains("__all__ = [\"A\", \"B\", \"C\"]"));
    }

    const MAKO: &str = "\
\"\"\"${message}\n
Revision ID: ${up_revision}
\"\"\"
from typing import Sequence, Union

from alembic import op
import sqlalchemy as sa
";

    #[test]
    fn test_inject_sqlmodel_import_after_typing_line() {
        let result = inject_sqlmodel_import(MAKO).unwrap();
        let lines: Vec<&str> = result.lines().collect();
        let typing_idx = lines
            .iter()
            .position(|l| l.starts_with("from typing import Sequence, Union"))
            .unwrap();
        assert_eq!(lines[typing_idx + 1], "import sqlmodel");
        assert!(result.ends_with('\n'));
    }

    #[test]
    fn test_inject_sqlmodel_import_marker_missing() {
        let content = "from alembic import op\n";
        assert!(inject_sqlmodel_import(content).is_none());
    }

    #[test]
    fn test_sqlmodel_import_present() {
        assert!(!sqlmodel_import_present(MAKO));
        let patched = inject_sqlmodel_import(MAKO).unwrap();
        assert!(sqlmodel_import_present(&patched));
    }
}
