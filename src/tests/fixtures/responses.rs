use crate::modules::registrations::core::outcome::RegistrationResponse;

pub fn make_registration_response(index: usize, status: u16) -> RegistrationResponse {
    RegistrationResponse {
        index,
        username: format!("test{}", 1000 + index),
        url: "http://localhost:4300/user/register".to_string(),
        status,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: r#"{"code":0,"data":{},"msg":""}"#.to_string(),
    }
}
