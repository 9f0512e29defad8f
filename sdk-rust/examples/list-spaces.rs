use confluence_assistant_sdk::AssistantApi;

mod common;

#[tokio::main]
async fn main() {
    let client = common::get_client();

    let spaces = client.get_spaces().await.unwrap();

    for space in spaces.spaces {
        let pages = client.get_pages(&space.key).await.unwrap();
        println!("{} ({}): {} pages", space.name, space.key, pages.pages.len());
    }
}
