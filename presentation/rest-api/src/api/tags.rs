use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Root,
    Products,
    Recommendations,
}
