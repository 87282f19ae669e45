use std::sync::Arc;

use rmcp::Json;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    AnnotateAble, GetPromptRequestParams, GetPromptResult, ListPromptsResult, ListResourcesResult,
    PaginatedRequestParams, RawResource, ReadResourceRequestParams, ReadResourceResult,
    ResourceContents,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer};
use rmcp::{prompt, prompt_handler, prompt_router, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use daily_coach::{
    CATEGORY_ORDER, Category, Comment, DailyMetrics, MAX_COMMENTS, MacroSplit, RuleSet,
};

pub mod error;
mod prompts;
pub mod startup;

pub use error::{McpError, McpResult};

pub const RULES_RESOURCE_URI: &str = "daily-coach://rules";

#[derive(Clone)]
pub struct DailyCoachMcpHandler {
    rules: Arc<RuleSet>,
    tool_router: rmcp::handler::server::tool::ToolRouter<DailyCoachMcpHandler>,
    prompt_router: rmcp::handler::server::router::prompt::PromptRouter<DailyCoachMcpHandler>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CommentsResult {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ExplainResult {
    pub macros: MacroSplit,
    /// Every candidate before per-category reduction.
    pub candidates: Vec<Comment>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RulesResult {
    pub rules: RuleSet,
    pub category_order: Vec<Category>,
    pub max_comments: usize,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct InsightsPayloadParams {
    /// Raw JSON body of a day-insights response.
    pub body: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DailyCoachingReviewParams {
    pub focus: Option<String>,
}

#[tool_router]
#[prompt_router]
impl DailyCoachMcpHandler {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules: Arc::new(rules),
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    pub fn tool_count(&self) -> usize {
        self.tool_router.list_all().len()
    }

    pub fn prompt_count(&self) -> usize {
        self.prompt_router.list_all().len()
    }

    fn rules_result(&self) -> RulesResult {
        RulesResult {
            rules: (*self.rules).clone(),
            category_order: CATEGORY_ORDER.to_vec(),
            max_comments: MAX_COMMENTS,
        }
    }

    /// Parse a raw insights body and evaluate it.
    pub fn evaluate_payload(&self, body: &str) -> McpResult<CommentsResult> {
        if body.trim().is_empty() {
            return Err(McpError::Validation("insights body is empty".into()));
        }
        let metrics = DailyMetrics::from_insights_json(body)?;
        Ok(CommentsResult {
            comments: daily_coach::evaluate_with_rules(&metrics, &self.rules),
        })
    }

    #[tool(
        name = "evaluate_daily_comments",
        description = "Pick up to three coaching comments for one day of meals, water and weight"
    )]
    async fn evaluate_daily_comments(
        &self,
        params: Parameters<DailyMetrics>,
    ) -> Result<Json<CommentsResult>, String> {
        let metrics = params.0;
        let comments = daily_coach::evaluate_with_rules(&metrics, &self.rules);
        Ok(Json(CommentsResult { comments }))
    }

    #[tool(
        name = "evaluate_insights_payload",
        description = "Evaluate coaching comments from a raw day-insights JSON body"
    )]
    async fn evaluate_insights_payload(
        &self,
        params: Parameters<InsightsPayloadParams>,
    ) -> Result<Json<CommentsResult>, String> {
        let result = self.evaluate_payload(&params.0.body)?;
        Ok(Json(result))
    }

    #[tool(
        name = "explain_daily_comments",
        description = "Show macro shares, all rule candidates and the final comments for one day"
    )]
    async fn explain_daily_comments(
        &self,
        params: Parameters<DailyMetrics>,
    ) -> Result<Json<ExplainResult>, String> {
        let metrics = params.0;
        Ok(Json(ExplainResult {
            macros: daily_coach::macro_split(&metrics),
            candidates: daily_coach::evaluate_rules(&metrics, &self.rules),
            comments: daily_coach::evaluate_with_rules(&metrics, &self.rules),
        }))
    }

    #[tool(
        name = "get_coaching_rules",
        description = "Get the active coaching thresholds, category order and display cap"
    )]
    async fn get_coaching_rules(&self) -> Result<Json<RulesResult>, String> {
        Ok(Json(self.rules_result()))
    }

    #[prompt(
        name = "daily-coaching-review",
        description = "Review today's intake and turn coaching comments into advice"
    )]
    async fn daily_coaching_review(
        &self,
        params: Parameters<DailyCoachingReviewParams>,
    ) -> GetPromptResult {
        prompts::daily_coaching_review_prompt(params.0.focus.as_deref())
    }
}

#[tool_handler]
#[prompt_handler(router = self.prompt_router)]
impl rmcp::ServerHandler for DailyCoachMcpHandler {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo::new(
            rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .enable_resources()
                .build(),
        )
        .with_instructions(
            "Daily coach MCP server - turns a day's calories, macros, water and weight \
             into short coaching comments.",
        )
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        let mut res = RawResource::new(RULES_RESOURCE_URI, "Coaching Rules").no_annotation();
        res.description = Some("Thresholds, category order and display cap in use".to_string());
        res.mime_type = Some("application/json".to_string());

        Ok(ListResourcesResult {
            resources: vec![res],
            next_cursor: None,
            meta: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        if request.uri != RULES_RESOURCE_URI {
            return Err(ErrorData::invalid_params(
                format!("Unknown resource URI: {}", request.uri),
                None,
            ));
        }
        let text = serde_json::to_string_pretty(&self.rules_result())
            .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;

        Ok(ReadResourceResult::new(vec![
            ResourceContents::TextResourceContents {
                uri: request.uri.clone(),
                mime_type: Some("application/json".to_string()),
                text,
                meta: None,
            },
        ]))
    }
}
