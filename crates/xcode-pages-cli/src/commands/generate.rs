//! Commands running the documentation build.

use crate::commands::Session;
use crate::error::Result;
use crate::ui;
use xcode_pages::layout;

/// Generate HTML documentation.
pub async fn doxygen(session: &Session) -> Result<()> {
    ui::info("Generating documentation...");
    session.pipeline().doxygen().await?;
    ui::success(&format!(
        "Documentation written to {}",
        layout::html_output_directory(session.pipeline().env())?
    ));
    Ok(())
}

/// Generate documentation and package the docset.
pub async fn docset(session: &Session) -> Result<()> {
    ui::info("Generating documentation and packaging docset...");
    session.pipeline().doxygen_docset().await?;
    ui::success("Docset packaged");
    Ok(())
}

/// Generate documentation, install the docset and reload it in the IDE.
pub async fn install(session: &Session) -> Result<()> {
    ui::info("Generating and installing docset...");
    let installed = session.pipeline().doxygen_docset_install().await?;

    if installed.is_empty() {
        ui::warning("No docset bundle found after install; is GENERATE_DOCSET overridden?");
        return Ok(());
    }

    for path in &installed {
        ui::success(&format!(
            "Loaded {} in {}",
            path.display(),
            session.pipeline().settings().ide_app
        ));
    }
    Ok(())
}
