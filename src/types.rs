use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlackFile {
    pub id: String,
    pub name: String,
    // Not every file record carries a size; treat a missing one as zero bytes.
    #[serde(default)]
    pub size: u64,
}

#[derive(Debug, Deserialize)]
pub struct UsersListResponse {
    pub members: Vec<Member>,
}

#[derive(Debug, Deserialize)]
pub struct FilesListResponse {
    pub files: Vec<SlackFile>,
}
