use confluence_assistant_sdk::{AssistantApi, ExportRequest};

mod common;

#[tokio::main]
async fn main() {
    let format = std::env::args().nth(1).unwrap_or_else(|| "pdf".to_string());

    let client = common::get_client();

    let exported = client
        .export_content(ExportRequest::new(
            "# Release notes\n\n- Faster search\n- Chart export",
            format,
            "release-notes",
        ))
        .await
        .unwrap();

    let path = exported.write_to(std::env::temp_dir()).unwrap();
    println!(
        "wrote {} bytes of {} to {}",
        exported.payload.bytes().len(),
        exported.payload.mime(),
        path.display()
    );
}
