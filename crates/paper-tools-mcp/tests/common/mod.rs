//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use serde_json::json;
use wiremock::MockServer;

use paper_tools_mcp::config::Config;
use paper_tools_mcp::tools::ToolContext;

/// Write a PDF with one line of text per page.
pub fn write_pdf(path: &Path, pages: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = i64::try_from(kids.len()).unwrap();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).unwrap();
}

/// Context whose Semantic Scholar client points at `mock_server`.
pub fn context_for(mock_server: &MockServer, pdf_folder: &Path) -> ToolContext {
    let config = Config::for_testing(&mock_server.uri(), pdf_folder);
    ToolContext::new(&config).unwrap()
}

/// Context with a custom configuration tweak.
pub fn context_with(
    mock_server: &MockServer,
    pdf_folder: &Path,
    tweak: impl FnOnce(&mut Config),
) -> ToolContext {
    let mut config = Config::for_testing(&mock_server.uri(), pdf_folder);
    tweak(&mut config);
    ToolContext::new(&config).unwrap()
}

/// Context for tests that never reach the network.
pub fn offline_context(pdf_folder: &Path) -> ToolContext {
    let config = Config::for_testing("http://127.0.0.1:9", pdf_folder);
    ToolContext::new(&config).unwrap()
}

/// Sample paper JSON as the Graph API returns it.
pub fn sample_paper_json(id: &str, title: &str, year: i32, citations: i64) -> serde_json::Value {
    json!({
        "paperId": id,
        "title": title,
        "abstract": format!("Abstract for {}", title),
        "year": year,
        "authors": [{"authorId": "1", "name": "Test Author"}],
        "url": format!("https://www.semanticscholar.org/paper/{}", id),
        "venue": "Test Conference",
        "publicationTypes": ["Conference"],
        "citationCount": citations
    })
}

/// Sample search page JSON.
pub fn sample_search_result(papers: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "total": papers.len(),
        "offset": 0,
        "data": papers
    })
}
