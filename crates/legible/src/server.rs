//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the readability engine and spell checker over stdio. Each tool
//! delegates to `legible-core`; no scoring logic lives here.
//!
//! The `flesch_kincaid_grade_level`, `flesch_reading_ease`, and `word_count`
//! tools answer with a flat status record:
//!
//! ```json
//! { "status": "OK", "message": "OK", "grade": "10.77" }
//! ```
//!
//! Oversized input is reported in-band rather than as a protocol error:
//!
//! ```json
//! { "status": "ERROR", "message": "Too many bytes: 12034. Current limit is 10000.", "grade": "0" }
//! ```

use camino::Utf8PathBuf;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde_json::{Map, Value};

use legible_core::{SpellChecker, check_input_size, readability, words};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for tools that take only text.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The text to analyze.
    pub text: String,
}

/// Parameters for the `check_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckReadabilityParams {
    /// The text to analyze.
    pub text: String,
    /// Maximum acceptable Flesch-Kincaid grade level.
    pub max_grade: Option<f64>,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// MCP server exposing readability scoring and spell checking.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
    word_list: Utf8PathBuf,
}

/// Build the `{status, message, <key>}` record for a single-value tool.
///
/// `value` is only called when the text is within the limit; otherwise the
/// record carries `"0"` and the size error.
pub fn status_record(
    key: &str,
    text: &str,
    max_input_bytes: Option<usize>,
    value: impl FnOnce(&str) -> String,
) -> Map<String, Value> {
    let (status, message, value) = match check_input_size(text.len(), max_input_bytes) {
        Ok(()) => ("OK", "OK".to_string(), value(text)),
        Err(err) => ("ERROR", err.to_string(), "0".to_string()),
    };

    let mut record = Map::new();
    record.insert("status".to_string(), Value::from(status));
    record.insert("message".to_string(), Value::from(message));
    record.insert(key.to_string(), Value::from(value));
    record
}

fn json_result(value: &impl serde::Serialize) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance.
    pub fn new(max_input_bytes: Option<usize>, word_list: Utf8PathBuf) -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes,
            word_list,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        if params.format == "json" {
            return json_result(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            }));
        }

        let text = format!(
            "{} v{}\n{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION"),
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Flesch-Kincaid Grade Level as a status record.
    #[tool(
        description = "Flesch-Kincaid Grade Level of text. Returns {status, message, grade} with grade formatted to two decimals."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn flesch_kincaid_grade_level(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "flesch_kincaid_grade_level", "executing MCP tool");
        let record = status_record("grade", &params.text, self.max_input_bytes, |text| {
            format!("{:.2}", readability::flesch_kincaid_grade_level(text))
        });
        tracing::info!(tool = "flesch_kincaid_grade_level", status = ?record.get("status"), "MCP tool completed");
        json_result(&record)
    }

    /// Flesch Reading Ease as a status record.
    #[tool(
        description = "Flesch Reading Ease score of text. Returns {status, message, score} with score formatted to two decimals."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn flesch_reading_ease(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "flesch_reading_ease", "executing MCP tool");
        let record = status_record("score", &params.text, self.max_input_bytes, |text| {
            format!("{:.2}", readability::flesch_reading_ease(text))
        });
        tracing::info!(tool = "flesch_reading_ease", status = ?record.get("status"), "MCP tool completed");
        json_result(&record)
    }

    /// Word count as a status record.
    #[tool(description = "Count words in text. Returns {status, message, count}.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn word_count(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "word_count", "executing MCP tool");
        let record = status_record("count", &params.text, self.max_input_bytes, |text| {
            words::count_words(text).to_string()
        });
        tracing::info!(tool = "word_count", status = ?record.get("status"), "MCP tool completed");
        json_result(&record)
    }

    /// Full readability report.
    #[tool(
        description = "Check readability of text. Returns both Flesch scores, word/sentence/syllable totals, and averages."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_readability(
        &self,
        Parameters(params): Parameters<CheckReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "check_readability",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );

        check_input_size(params.text.len(), self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let report =
            readability::check_readability(&params.text, params.strip_markdown, params.max_grade);

        tracing::info!(
            tool = "check_readability",
            grade = report.grade_level,
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Spell check against the configured word list.
    #[tool(
        description = "Spell check text against the configured word list. Returns a map of misspelled word to its 1-based word position (last occurrence)."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", word_list = %self.word_list))]
    fn check_spelling(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "check_spelling", "executing MCP tool");

        check_input_size(params.text.len(), self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let checker = SpellChecker::open(&self.word_list)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        let misspelled = checker.check_spelling(&params.text);

        tracing::info!(
            tool = "check_spelling",
            misspelled = misspelled.len(),
            "MCP tool completed"
        );
        json_result(&misspelled)
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use tools to score readability, count words, and check spelling.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
