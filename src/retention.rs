use chrono::{DateTime, Duration, Utc};
use colored::Colorize;
use log::warn;

use crate::api::SlackApi;
use crate::error::{Result, SlackError};
use crate::types::{Member, SlackFile};

// Resolve -> List -> (empty? report : Delete-each). Any failure aborts the
// whole run; files deleted before the failure stay deleted.
pub async fn run(
    api: &SlackApi,
    username: &str,
    filter_types: &str,
    cutoff_days: u32,
) -> Result<()> {
    let user_id = resolve_user_id(api, username).await?;
    if user_id.is_none() {
        warn!("user '{username}' not found in the member list; listing without a user filter");
    }

    let files = list_old_files(api, user_id.as_deref(), filter_types, cutoff_days).await?;

    if files.is_empty() {
        println!("{}", "INFO: No files returned from this user".yellow());
        return Ok(());
    }

    delete_files(api, &files).await?;

    let reclaimed: u64 = files.iter().map(|f| f.size).sum();
    println!(
        "{}",
        format!(
            "Deleted {} files ({} reclaimed).",
            files.len(),
            human_bytes::human_bytes(reclaimed as f64)
        )
        .green()
    );

    Ok(())
}

pub async fn resolve_user_id(api: &SlackApi, username: &str) -> Result<Option<String>> {
    let response = api.users_list().await?;
    Ok(find_member_id(&response.members, username))
}

fn find_member_id(members: &[Member], username: &str) -> Option<String> {
    members
        .iter()
        .find(|m| m.name == username)
        .map(|m| m.id.clone())
}

// None when now minus the cutoff falls outside the representable calendar.
#[must_use]
pub fn cutoff_timestamp(now: DateTime<Utc>, cutoff_days: u32) -> Option<i64> {
    now.checked_sub_signed(Duration::days(i64::from(cutoff_days)))
        .map(|cutoff| cutoff.timestamp())
}

pub async fn list_old_files(
    api: &SlackApi,
    user_id: Option<&str>,
    filter_types: &str,
    cutoff_days: u32,
) -> Result<Vec<SlackFile>> {
    let ts_to = cutoff_timestamp(Utc::now(), cutoff_days)
        .ok_or(SlackError::CutoffOutOfRange { days: cutoff_days })?;
    let response = api.files_list(user_id, ts_to, filter_types).await?;
    Ok(response.files)
}

pub async fn delete_files(api: &SlackApi, files: &[SlackFile]) -> Result<()> {
    for file in files {
        println!(
            "Deleting file {} ({})",
            file.name,
            human_bytes::human_bytes(file.size as f64)
        );
        api.files_delete(&file.id).await?;
    }
    Ok(())
}
