//! Init command implementation.

use std::path::PathBuf;

use crate::app::api::{
    DeployOutcome, FileAction, InitFlags, InitReport, TemplateOutcome, UiOutcome,
};
use crate::domain::AppError;

pub fn run_init(
    dir: Option<PathBuf>,
    title: Option<String>,
    yes: bool,
    no: bool,
) -> Result<(), AppError> {
    let flags = InitFlags { title, yes, no };
    let report = match dir {
        Some(dir) => crate::app::api::init_at(dir, &flags)?,
        None => crate::app::api::init(&flags)?,
    };
    print_report(&report);
    Ok(())
}

fn print_report(report: &InitReport) {
    if report.manifest.created {
        println!("✅ Created package.json");
    } else if report.manifest.updated {
        println!("✅ Updated package.json scripts");
    }

    for install in [&report.runtime, &report.development] {
        if !install.installed.is_empty() {
            println!("✅ Installed {}", install.installed.join(", "));
        }
    }

    for file in &report.configs {
        match file.action {
            FileAction::Unchanged => {}
            FileAction::Skipped => println!("⚠️  Kept existing {}", file.target),
            action => println!("✅ {} {}", capitalize(&action.to_string()), file.target),
        }
    }

    if let TemplateOutcome::Installed { written } = &report.template {
        if !written.is_empty() {
            println!("✅ Added starter files: {}", written.join(", "));
        }
    }

    if let UiOutcome::Generated(framework) = report.ui {
        println!("✅ Generated {} UI in ui/", framework);
    }

    match &report.deploy {
        DeployOutcome::AlreadyConfigured { script_id } => {
            println!("✅ clasp already configured (script {})", script_id);
        }
        DeployOutcome::Skipped => println!("⚠️  Skipped clasp setup (not logged in)"),
        DeployOutcome::Cloned { script_id } => {
            println!("✅ Cloned Apps Script project {}", script_id);
        }
        DeployOutcome::Created(links) => {
            println!("✅ Created Apps Script project \"{}\"", report.options.title);
            if let Some(document) = &links.document {
                println!("   Document: {}", document);
            }
            if let Some(script) = &links.script {
                println!("   Script:   {}", script);
            }
        }
    }

    println!("✅ Initialized {}", report.options.title);
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
