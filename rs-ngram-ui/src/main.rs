use std::time::Duration;

use eframe::{egui, Frame};
use egui::Context;

use reqwest::blocking::Client;
use reqwest::Result;
use serde::{Deserialize, Serialize};

use rs_ngram_core::{AnalysisResult, NgramOrder};

/// Used when `NGRAM_API_URL` is not set.
const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";

/// Body of `POST /analyze`.
#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

/// Successful `POST /analyze` response.
#[derive(Deserialize)]
struct AnalyzeResponse {
    #[serde(flatten)]
    result: AnalysisResult,
    latency_ms: f64,
}

/// Body of every error response.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
    base_url: String,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Sends a GET request to `/health` and returns the reported status.
    fn get_health(&self) -> Result<String> {
        #[derive(Deserialize)]
        struct Health {
            status: String,
        }

        let health: Health = self.client
            .get(format!("{}/health", self.base_url))
            .send()?
            .error_for_status()?
            .json()?;
        Ok(health.status)
    }

    /// Sends a POST request to `/analyze`.
    ///
    /// On a non-2xx status the server's `error` message is returned.
    fn post_analyze(&self, text: &str) -> std::result::Result<AnalyzeResponse, String> {
        let response = self.client
            .post(format!("{}/analyze", self.base_url))
            .json(&AnalyzeRequest { text })
            .send()
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if status.is_success() {
            return response.json().map_err(|e| e.to_string());
        }

        match response.json::<ErrorBody>() {
            Ok(body) => Err(body.error),
            Err(_) => Err(format!("HTTP error! status: {status}")),
        }
    }
}

/// Global UI state (MUST persist between frames in egui).
struct AnalyzerUI {
    rest: RESTContext,
    server_status: String,

    text: String,
    selected_order: NgramOrder,

    last_response: Option<AnalyzeResponse>,
    last_error: Option<String>,
}

impl AnalyzerUI {
    /// Initializes the UI with sane defaults.
    fn new() -> Result<Self> {
        let base_url = std::env::var("NGRAM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let mut ui = Self {
            rest: RESTContext::new(base_url)?,
            server_status: String::new(),

            text: "The quick brown fox jumps over the lazy dog".to_owned(),
            selected_order: NgramOrder::Unigram,

            last_response: None,
            last_error: None,
        };
        ui.get_health();
        Ok(ui)
    }

    /// Performs the health request.
    fn get_health(&mut self) {
        self.server_status = match self.rest.get_health() {
            Ok(status) => status,
            Err(e) => format!("unreachable ({e})"),
        };
    }

    /// Performs the analysis request.
    ///
    /// Blank text is refused locally, like the server would.
    fn post_analyze(&mut self) {
        if self.text.trim().is_empty() {
            self.last_error = Some("Text cannot be empty".to_owned());
            return;
        }
        match self.rest.post_analyze(&self.text) {
            Ok(response) => {
                self.last_response = Some(response);
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e),
        }
    }

    /// Summary statistics of the last analysis.
    fn show_summary(ui: &mut egui::Ui, response: &AnalyzeResponse) {
        let result = &response.result;
        let perplexity = if result.perplexity.is_finite() {
            result.perplexity.to_string()
        } else {
            "∞".to_owned()
        };

        egui::Grid::new("summary_grid")
            .num_columns(2)
            .spacing([20.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                for (label, value) in [
                    ("Total tokens", result.total_tokens.to_string()),
                    ("Unique tokens", result.unique_tokens.to_string()),
                    ("Stop words", result.stop_words.to_string()),
                    ("Entropy (bits)", result.entropy.to_string()),
                    ("Perplexity", perplexity),
                    ("Latency (ms)", response.latency_ms.to_string()),
                ] {
                    ui.label(label);
                    ui.label(value);
                    ui.end_row();
                }
            });
    }

    /// Ranked table for the selected order.
    fn show_table(ui: &mut egui::Ui, result: &AnalysisResult, order: NgramOrder) {
        let rows = result.ngrams.get(order);
        if rows.is_empty() {
            ui.label("Text too short for this n-gram size");
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("ngram_grid")
                .num_columns(4)
                .spacing([20.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("#");
                    ui.strong("N-gram");
                    ui.strong("Count");
                    ui.strong("Probability");
                    ui.end_row();

                    for row in rows {
                        ui.label(row.rank.to_string());
                        ui.label(row.token.as_str());
                        ui.label(row.count.to_string());
                        ui.label(format!("{:.2}%", row.probability));
                        ui.end_row();
                    }
                });
        });
    }
}

impl eframe::App for AnalyzerUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Server: {}", self.server_status));
                if ui.button("Refresh").clicked() {
                    self.get_health();
                }
            });

            ui.separator();

            ui.label("Text to analyze");
            ui.add_sized(
                [ui.available_width(), 120.0],
                egui::TextEdit::multiline(&mut self.text),
            );

            if ui
                .add_sized([200.0, 40.0], egui::Button::new("Analyze"))
                .clicked()
            {
                self.post_analyze();
            }

            if let Some(error) = &self.last_error {
                ui.colored_label(egui::Color32::RED, format!("Error: {error}"));
            }

            let Some(response) = &self.last_response else {
                ui.label("Click Analyze to start");
                return;
            };

            ui.separator();
            Self::show_summary(ui, response);
            ui.separator();

            ui.horizontal(|ui| {
                for order in NgramOrder::ALL {
                    ui.selectable_value(&mut self.selected_order, order, order.label());
                }
            });

            Self::show_table(ui, &response.result, self.selected_order);
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 720.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "rs-ngram",
        options,
        Box::new(|_| Ok(Box::new(AnalyzerUI::new()?))),
    )
}
