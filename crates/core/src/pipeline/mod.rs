pub mod detect_faces_use_case;
pub mod error;
pub mod face_request;
pub mod face_response;
