//! インポートの表示用モデルとレンダリング

use crate::auth::Import;
use crate::error::{AuthctlError, Result};
use crate::output::{Columns, OutputFormat};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use serde::Serialize;

/// 一覧の 1 行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRow {
    pub name: String,
    pub kind: String,
    pub local_subject: String,
    pub remote_subject: String,
    /// サービスインポートは None（表では空欄）
    pub allows_tracing: Option<bool>,
    pub sharing_connection_info: bool,
}

impl From<&Import> for ImportRow {
    fn from(imp: &Import) -> Self {
        Self {
            name: imp.name().to_string(),
            kind: imp.kind().to_string(),
            local_subject: imp.effective_local_subject().to_string(),
            remote_subject: imp.subject().to_string(),
            allows_tracing: imp.allow_tracing(),
            sharing_connection_info: imp.is_share_connection_info(),
        }
    }
}

/// 詳細表示
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDetail {
    pub name: String,
    pub kind: String,
    pub local_subject: String,
    pub account: String,
    pub remote_subject: String,
    pub sharing_connection_info: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allows_message_tracing: Option<bool>,
}

impl From<&Import> for ImportDetail {
    fn from(imp: &Import) -> Self {
        Self {
            name: imp.name().to_string(),
            kind: imp.kind().to_string(),
            local_subject: imp.effective_local_subject().to_string(),
            account: imp.account().to_string(),
            remote_subject: imp.subject().to_string(),
            sharing_connection_info: imp.is_share_connection_info(),
            allows_message_tracing: imp.allow_tracing(),
        }
    }
}

/// 一覧をテーブルとして描画
pub fn render_table(account_name: &str, rows: &[ImportRow]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        "Name",
        "Kind",
        "Local Subject",
        "Remote Subject",
        "Allows Tracing",
        "Sharing Connection Info",
    ]);

    for row in rows {
        let tracing = row
            .allows_tracing
            .map(|t| t.to_string())
            .unwrap_or_default();
        table.add_row(vec![
            row.name.clone(),
            row.kind.clone(),
            row.local_subject.clone(),
            row.remote_subject.clone(),
            tracing,
            row.sharing_connection_info.to_string(),
        ]);
    }

    format!("Imports for account {}\n{table}", account_name)
}

/// 一覧を JSON として描画
pub fn render_rows_json(rows: &[ImportRow]) -> Result<String> {
    serde_json::to_string_pretty(rows)
        .map_err(|e| AuthctlError::Serialize(format!("Failed to serialize imports: {}", e)))
}

/// 詳細を指定形式で描画
pub fn render_detail(detail: &ImportDetail, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_columns(detail)),
        OutputFormat::Json => serde_json::to_string_pretty(detail)
            .map_err(|e| AuthctlError::Serialize(format!("Failed to serialize to JSON: {}", e))),
        OutputFormat::Yaml => serde_yaml::to_string(detail)
            .map(|yaml| yaml.trim_end().to_string())
            .map_err(|e| AuthctlError::Serialize(format!("Failed to serialize to YAML: {}", e))),
    }
}

fn render_columns(detail: &ImportDetail) -> String {
    let mut cols = Columns::new(format!(
        "Import info for {} importing {}",
        detail.name, detail.local_subject
    ));

    cols.add_section_title("Configuration");
    cols.add_row("Name", &detail.name);
    cols.add_row("Local Subject", &detail.local_subject);
    cols.add_row("Account", &detail.account);
    cols.add_row("Remote Subject", &detail.remote_subject);
    cols.add_row("Sharing Connection Info", detail.sharing_connection_info);

    if let Some(tracing) = detail.allows_message_tracing {
        cols.add_row("Allows Message Tracing", tracing);
    }

    cols.render()
}

#[cfg(test)]
#[path = "import_view_test.rs"]
mod tests;
