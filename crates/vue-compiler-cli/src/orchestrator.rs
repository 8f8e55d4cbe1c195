//! Orchestrator for compiling input files.

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::input::RawElement;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use vue_codegen::{gen_element_data, CodegenState};
use vue_diagnostics::{Diagnostic, DiagnosticCollector};
use vue_template_compiler::{compile, AstArena, NodeId};

/// Generated output for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementReport {
    /// Tag name.
    pub tag: String,
    /// Nesting depth below the root.
    pub depth: usize,
    /// Branch condition when the element is part of a conditional chain.
    pub condition: Option<String>,
    /// Generated data object, if the element needs one.
    pub data: Option<String>,
    /// The element heads a hoistable static subtree.
    pub static_root: bool,
}

/// Result of compiling one template.
#[derive(Debug, Clone, Default)]
pub struct TemplateReport {
    /// Elements in render order.
    pub elements: Vec<ElementReport>,
    /// Diagnostics produced while compiling.
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of compiling one file.
#[derive(Debug)]
pub struct FileReport {
    /// Input file.
    pub path: PathBuf,
    /// Compilation output, or why the file could not be read.
    pub result: CliResult<TemplateReport>,
}

/// Result of a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of files compiled.
    pub file_count: usize,
    /// Number of files that could not be loaded.
    pub error_count: usize,
    /// Number of warnings.
    pub warning_count: usize,
    /// Time taken.
    pub duration_ms: u64,
}

/// Compile a JSON template source.
pub fn compile_source(source: &str, config: &Config) -> serde_json::Result<TemplateReport> {
    let raw = RawElement::from_json(source)?;
    let collector = Arc::new(DiagnosticCollector::new());
    let options = config.compiler_options(collector.clone());

    let mut arena = AstArena::new();
    let root = raw.build(&mut arena, None);
    let root = compile(&mut arena, root, &options);

    let state = CodegenState::new(&options);
    let mut elements = Vec::new();
    visit(&arena, root, 0, &state, &mut elements);

    Ok(TemplateReport {
        elements,
        diagnostics: collector.take(),
    })
}

fn collect_elements(
    arena: &AstArena,
    id: NodeId,
    depth: usize,
    condition: Option<String>,
    state: &CodegenState<'_>,
    out: &mut Vec<ElementReport>,
) {
    let el = &arena[id];
    out.push(ElementReport {
        tag: el.tag.to_string(),
        depth,
        condition,
        data: gen_element_data(arena, id, state),
        static_root: el.static_root,
    });
    for child in arena.element_children(id) {
        visit(arena, child, depth + 1, state, out);
    }
}

/// Walk the tree in render order, visiting every branch of each
/// conditional chain.
fn visit(
    arena: &AstArena,
    id: NodeId,
    depth: usize,
    state: &CodegenState<'_>,
    out: &mut Vec<ElementReport>,
) {
    let el = &arena[id];
    if !el.is_chain_head() {
        collect_elements(arena, id, depth, None, state, out);
        return;
    }
    for branch in &el.if_conditions {
        if branch.block != id && arena[branch.block].is_chain_head() {
            // An expanded `v-model` input used as an else branch.
            visit(arena, branch.block, depth, state, out);
            continue;
        }
        let condition = Some(branch.exp.clone().unwrap_or_else(|| "else".to_string()));
        collect_elements(arena, branch.block, depth, condition, state, out);
    }
}

/// Compile one file.
pub fn compile_file(path: &Path, config: &Config) -> FileReport {
    let result = std::fs::read_to_string(path)
        .map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|source| {
            compile_source(&source, config).map_err(|source| CliError::Json {
                path: path.to_path_buf(),
                source,
            })
        });
    FileReport {
        path: path.to_path_buf(),
        result,
    }
}

/// Find every `.json` file under the configured inputs.
pub fn find_inputs(config: &Config) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for input in &config.inputs {
        if input.is_file() {
            files.push(input.clone());
            continue;
        }
        for entry in walkdir::WalkDir::new(input)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|e| e == "json") {
                files.push(path.to_path_buf());
            }
        }
    }
    files
}

/// Compile every input file in parallel. Reports come back in input order.
pub fn run(config: &Config) -> (Vec<FileReport>, RunSummary) {
    let start = Instant::now();
    let files = find_inputs(config);
    tracing::info!(files = files.len(), "compiling templates");

    let reports: Vec<FileReport> = files
        .par_iter()
        .map(|path| compile_file(path, config))
        .collect();

    let mut summary = RunSummary {
        file_count: reports.len(),
        ..RunSummary::default()
    };
    for report in &reports {
        match &report.result {
            Ok(template) => summary.warning_count += template.diagnostics.len(),
            Err(e) => {
                tracing::warn!(path = %report.path.display(), error = %e, "failed to compile");
                summary.error_count += 1;
            }
        }
    }
    summary.duration_ms = start.elapsed().as_millis() as u64;
    (reports, summary)
}
