// UI layer: the interactive prompt sequence, built on `dialoguer`.
// The functions only ask questions and print results; deciding what
// request a set of answers maps to lives in `request`.

use crate::api::ApiClient;
use crate::request::{
    delete_status_message, Method, NewPost, NewUser, PostResource, RequestDescriptor,
};
use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Run one interactive session: ask for a resource and a method,
/// branch into the method-specific prompts, perform the request and
/// print the outcome. A dispatch failure is printed via its message
/// and ends the run cleanly, mirroring the no-retry contract.
pub fn run(api: &ApiClient) -> Result<()> {
    if let Err(e) = run_once(api) {
        eprintln!("{e:#}");
    }
    Ok(())
}

fn run_once(api: &ApiClient) -> Result<()> {
    let resource: String = Input::new()
        .with_prompt("What resource do you want to work with? (users or posts)")
        .interact_text()?;
    let method_token: String = Input::new()
        .with_prompt("What method do you want to work with? (DELETE, GET, PATCH, POST)")
        .interact_text()?;

    let Some(method) = Method::parse(&method_token) else {
        println!("Invalid method.");
        return Ok(());
    };

    match method {
        Method::Delete => handle_delete(api, &resource),
        Method::Get => handle_get(api, &resource),
        Method::Patch => handle_patch(api, &resource),
        Method::Post => handle_post(api, &resource),
    }
}

fn handle_delete(api: &ApiClient, resource: &str) -> Result<()> {
    let id: String = Input::new().with_prompt("Enter the ID to delete").interact_text()?;
    let request = RequestDescriptor::delete(resource, &id);

    // The DELETE flow branches on the raw status, so it bypasses the
    // non-2xx error policy of `execute`.
    let spinner = spinner("Deleting...");
    let response = api.dispatch(&request);
    spinner.finish_and_clear();

    let response = response?;
    let id = request.id.as_deref().unwrap_or_default();
    println!("{}", delete_status_message(id, response.status));
    Ok(())
}

fn handle_get(api: &ApiClient, resource: &str) -> Result<()> {
    let choice: String = Input::new()
        .with_prompt("You choose GET. Do you want to make a GET All or GET By ID? (all/id)")
        .interact_text()?;

    let request = match choice.trim() {
        "all" => RequestDescriptor::get_all(resource),
        "id" => {
            let id: String = Input::new().with_prompt("Enter the ID").interact_text()?;
            RequestDescriptor::get_by_id(resource, &id)
        }
        _ => {
            eprintln!("Invalid option selected.");
            return Ok(());
        }
    };

    let spinner = spinner("Fetching...");
    let body = api.execute(&request);
    spinner.finish_and_clear();

    println!("{}", serde_json::to_string_pretty(&body?)?);
    Ok(())
}

fn handle_patch(api: &ApiClient, resource: &str) -> Result<()> {
    let keys: String = Input::new()
        .with_prompt("Enter the field(s) to update (comma-separated)")
        .interact_text()?;
    let values: String = Input::new()
        .with_prompt("Enter the corresponding value(s) (comma-separated)")
        .interact_text()?;
    let request = RequestDescriptor::patch(resource, &keys, &values);

    let spinner = spinner("Updating...");
    let body = api.execute(&request);
    spinner.finish_and_clear();

    println!("{}", serde_json::to_string_pretty(&body?)?);
    Ok(())
}

fn handle_post(api: &ApiClient, resource: &str) -> Result<()> {
    match PostResource::parse(resource) {
        Some(PostResource::Users) => {
            let user = NewUser {
                id: Input::new().with_prompt("User ID?").interact_text()?,
                first_name: Input::new().with_prompt("User first_name?").interact_text()?,
                last_name: Input::new().with_prompt("User last_name?").interact_text()?,
                email: Input::new().with_prompt("User Email?").interact_text()?,
                gender: Input::new().with_prompt("User Gender?").interact_text()?,
            };
            let request = RequestDescriptor::create(resource, &user)?;
            submit_creation(api, &request, "user")
        }
        Some(PostResource::Posts) => {
            let post = NewPost {
                post_id: Input::new().with_prompt("post_id?").interact_text()?,
                user_id: Input::new().with_prompt("user_id?").interact_text()?,
                post_text: Input::new().with_prompt("post_text?").interact_text()?,
                post_date: Input::new().with_prompt("post_date?").interact_text()?,
                likes: Input::new().with_prompt("likes?").interact_text()?,
                comments: Input::new().with_prompt("comments?").interact_text()?,
                hashtags: Input::new().with_prompt("hashtags?").interact_text()?,
                location: Input::new().with_prompt("location?").interact_text()?,
                post_image: Input::new().with_prompt("post_image?").interact_text()?,
            };
            let request = RequestDescriptor::create(resource, &post)?;
            submit_creation(api, &request, "post")
        }
        None => {
            println!("Invalid resource for POST request.");
            Ok(())
        }
    }
}

/// POST the descriptor and report creation success or failure based on
/// whether the API echoed a body back.
fn submit_creation(api: &ApiClient, request: &RequestDescriptor, noun: &str) -> Result<()> {
    let spinner = spinner("Creating...");
    let body = api.execute(request);
    spinner.finish_and_clear();

    let body = body?;
    if body.is_null() {
        println!("Error creating the new {noun}.");
    } else {
        println!("The new {noun} was created successfully.");
        println!("{} data: {}", capitalize(noun), serde_json::to_string_pretty(&body)?);
    }
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message(msg.to_string());
    pb
}
