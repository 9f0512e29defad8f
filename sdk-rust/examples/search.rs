use confluence_assistant_sdk::{AssistantApi, SearchRequest};

mod common;

#[tokio::main]
async fn main() {
    let mut args = std::env::args().skip(1);
    let space_key = args.next().expect("usage: search <space-key> <query>");
    let query = args.collect::<Vec<_>>().join(" ");

    let client = common::get_client();

    let pages = client.get_pages(&space_key).await.unwrap();
    let response = client
        .search(SearchRequest {
            space_key,
            page_titles: pages.pages,
            query,
        })
        .await
        .unwrap();

    println!("{response:#?}");
}
