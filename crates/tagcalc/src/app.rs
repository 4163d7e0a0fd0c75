//! Application entry point and dispatch.

use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::{Context, Result};

use tagcalc_cli::output::write_suggestion_table;
use tagcalc_cli::{ui, CliResultPresenter, FetchSpinner};
use tagcalc_core::suggestion::matching;
use tagcalc_core::{evaluate, tokenize, EvalError, FormulaEditor, Suggestion};
use tagcalc_suggest::{
    FileSuggestionSource, HttpSuggestionSource, SuggestionCache, SuggestionSource,
};
use tagcalc_tui::TuiApp;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        tagcalc_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let bindings = config.parsed_tags()?;

    if config.list_suggestions {
        return run_list(config);
    }

    if config.is_tui_mode() {
        return run_tui(config, &bindings);
    }

    run_cli(config, &bindings)
}

/// Build the suggestion source named by the configuration.
pub fn build_source(config: &AppConfig) -> Result<Box<dyn SuggestionSource>> {
    if let Some(path) = &config.suggestions_file {
        return Ok(Box::new(FileSuggestionSource::new(path)));
    }
    let source = HttpSuggestionSource::new(config.endpoint.clone(), config.timeout_duration()?)
        .context("building HTTP client")?;
    Ok(Box::new(source))
}

pub fn build_cache(config: &AppConfig) -> Result<Arc<SuggestionCache>> {
    let source = build_source(config)?;
    tracing::debug!(source = %source.describe(), "suggestion source configured");
    Ok(Arc::new(SuggestionCache::new(
        source,
        config.cache_ttl_duration()?,
    )))
}

fn fetch_with_spinner(config: &AppConfig) -> Result<Arc<[Suggestion]>> {
    let cache = build_cache(config)?;
    let spinner = FetchSpinner::start("Fetching suggestions", config.quiet);
    let suggestions = cache.get();
    spinner.finish(suggestions.len());
    Ok(suggestions)
}

/// Fill every tag that has no value from the first suggestion with the same
/// name. Returns the bindings that were added.
pub fn auto_bind(editor: &mut FormulaEditor, suggestions: &[Suggestion]) -> Vec<(String, String)> {
    let mut added = Vec::new();
    for token in tokenize(editor.store().formula()) {
        let Some(name) = token.variable() else {
            continue;
        };
        if editor.store().resolved_value(name).is_some() {
            continue;
        }
        if let Some(first) = matching(suggestions, name).next() {
            let value = first.value_string();
            tracing::debug!(tag = name, value = %value, "auto-bound tag");
            editor.select_tag_value(name, &value);
            added.push((name.to_string(), value));
        }
    }
    added
}

fn run_cli(config: &AppConfig, bindings: &[(String, String)]) -> Result<()> {
    let formula = config.formula.as_deref().unwrap_or_default();
    if formula.is_empty() {
        tracing::debug!("empty formula, no result to show");
        return Ok(());
    }
    let mut editor = FormulaEditor::new();
    editor.load_formula(formula);
    for (name, value) in bindings {
        editor.select_tag_value(name, value);
    }

    let mut shown = bindings.to_vec();
    if config.auto_bind {
        let suggestions = fetch_with_spinner(config)?;
        shown.extend(auto_bind(&mut editor, &suggestions));
    }

    let outcome = evaluate(editor.store().formula(), editor.store().tag_values());
    if let Err(EvalError::Unresolved(names)) = &outcome {
        tracing::warn!(tags = ?names, "formula has unbound tags");
    }

    let color = !ui::is_color_disabled() && io::stdout().is_terminal();
    CliResultPresenter::new(config.verbose, config.quiet)
        .with_color(color)
        .print_result(formula, &shown, &outcome)?;

    outcome.map(|_| ()).map_err(Into::into)
}

fn run_list(config: &AppConfig) -> Result<()> {
    let suggestions = fetch_with_spinner(config)?;
    if !config.quiet {
        ui::print_header("Suggestions");
        if suggestions.is_empty() {
            ui::print_warning("no suggestions available");
        }
    }
    write_suggestion_table(&mut io::stdout(), &suggestions)?;
    Ok(())
}

fn run_tui(config: &AppConfig, bindings: &[(String, String)]) -> Result<()> {
    let mut editor = FormulaEditor::new();
    if let Some(formula) = &config.formula {
        editor.load_formula(formula.clone());
    }
    for (name, value) in bindings {
        editor.select_tag_value(name, value);
    }

    let cache = build_cache(config)?;
    let mut app = TuiApp::new(editor, Some(cache));
    app.run().context("TUI error")?;

    let editor = app.finish();
    if !config.quiet {
        if let Some(result) = editor.result() {
            println!("{} = {result}", editor.store().formula());
        }
    }
    Ok(())
}
