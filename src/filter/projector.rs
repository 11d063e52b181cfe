//! Projection of manifest records onto output records

use crate::manifest::types::{
    ApplicationRef, ArtifactForm, ArtifactRecord, ArtifactRef, OutputRecord, SQL_ZIP,
};

/// Extract the output fields of a record.
///
/// The artifact form (`artifactId` + `artifactType`) wins over the application
/// form (`appName` + `applicationType`). `dbType` is kept only for `sql.zip`
/// artifacts. Returns `None` for a record complete in neither form.
pub fn project(record: &ArtifactRecord) -> Option<OutputRecord> {
    let form = artifact_form(record)?;

    Some(OutputRecord {
        deployment_target: record.deployment_target.clone(),
        form,
    })
}

fn artifact_form(record: &ArtifactRecord) -> Option<ArtifactForm> {
    if let (Some(artifact_id), Some(artifact_type)) = (&record.artifact_id, &record.artifact_type)
    {
        let db_type = if artifact_type == SQL_ZIP {
            record.db_type.clone()
        } else {
            None
        };

        return Some(ArtifactForm::Artifact(ArtifactRef {
            artifact_id: artifact_id.clone(),
            artifact_type: artifact_type.clone(),
            db_type,
        }));
    }

    if let (Some(app_name), Some(application_type)) = (&record.app_name, &record.application_type)
    {
        return Some(ArtifactForm::Application(ApplicationRef {
            app_name: app_name.clone(),
            application_type: application_type.clone(),
        }));
    }

    None
}
