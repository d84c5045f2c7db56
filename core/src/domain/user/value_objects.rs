#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub username: String,
    pub password: String,
}
