//! `cutter expand`: show what a template reference resolves to without
//! fetching anything.

use serde_json::json;

use cutter_adapters::FileConfigLoader;
use cutter_core::{
    application::ConfigLoader,
    domain::{TemplateSource, expand_abbreviations},
};

use crate::{
    cli::{ExpandArgs, GlobalArgs, OutputFormat},
    commands::config_path,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ExpandArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let loader = FileConfigLoader::new();
    let config = loader.load(&config_path(&global, &loader))?;

    let expanded = expand_abbreviations(&args.template, &config.abbreviations);
    let source = TemplateSource::classify(&expanded);

    if output.format() == OutputFormat::Json {
        let report = json!({
            "template": args.template,
            "expanded": expanded,
            "source": source,
        });
        output.data(&format!("{report:#}"))?;
        return Ok(());
    }

    output.field("expanded", &expanded)?;
    output.field("source", &source.to_string())?;
    Ok(())
}
