//! Dashboard command handler

use super::{open_store, runtime, CommandResult};
use course_catalog::config::Config;
use course_catalog::core::dashboard::{DashboardContext, DashboardRenderer, DEFAULT_TITLE};
use course_catalog::core::service::CourseService;
use course_catalog::verbose;
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name inside the reports directory
const DEFAULT_FILE_NAME: &str = "courses.html";

/// Render the dashboard to a file; returns the path written
pub fn run(output: Option<&Path>, title: Option<&str>, config: &Config) -> CommandResult<PathBuf> {
    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let reports_dir = PathBuf::from(&config.paths.reports_dir);
            fs::create_dir_all(&reports_dir)?;
            reports_dir.join(DEFAULT_FILE_NAME)
        }
    };

    let courses = runtime()?.block_on(async {
        let store = open_store(config).await?;
        let courses = CourseService::new(store).list_courses().await?;
        Ok::<_, Box<dyn std::error::Error>>(courses)
    })?;
    verbose!("Rendering {} courses", courses.len());

    let ctx = DashboardContext::from_courses(title.unwrap_or(DEFAULT_TITLE), courses);
    DashboardRenderer::new().generate(&ctx, &output_path)?;
    println!("✓ Dashboard written to {}", output_path.display());
    Ok(output_path)
}
