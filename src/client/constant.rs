pub const SITE_NAME: &str = "Link Prompt";
