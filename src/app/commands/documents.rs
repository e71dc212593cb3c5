use crate::domain::{AppError, GUIDE_FILE, ProjectDocuments, RULES_FILE};
use crate::ports::ProjectStore;

/// Check and read both project documents.
///
/// Existence of both files is checked before failing so the error reports each.
pub(crate) fn load_documents<S: ProjectStore>(store: &S) -> Result<ProjectDocuments, AppError> {
    let guide_exists = store.document_exists(GUIDE_FILE);
    let rules_exists = store.document_exists(RULES_FILE);

    if !guide_exists || !rules_exists {
        return Err(AppError::MissingDocuments {
            root: store.root().display().to_string(),
            guide_name: GUIDE_FILE.to_string(),
            guide_exists,
            rules_name: RULES_FILE.to_string(),
            rules_exists,
        });
    }

    let guide = read(store, GUIDE_FILE)?;
    let rules = read(store, RULES_FILE)?;
    Ok(ProjectDocuments { guide, rules })
}

fn read<S: ProjectStore>(store: &S, name: &str) -> Result<String, AppError> {
    store.read_document(name).map_err(|source| AppError::DocumentRead {
        path: store.root().join(name).display().to_string(),
        source,
    })
}
