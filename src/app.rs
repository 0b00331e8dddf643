use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, web};

use crate::{handlers, service};

pub fn create_app(
    course_service: Arc<service::CourseService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .wrap(Cors::permissive())
        .app_data(Data::from(course_service))
        .route("/generate-chapters", web::post().to(handlers::generate_chapters))
        .route("/generate-content", web::post().to(handlers::generate_content))
        .route("/dig-deeper", web::post().to(handlers::dig_deeper))
        .route("/generate-exam", web::post().to(handlers::generate_exam))
        .route("/evaluate-exam", web::post().to(handlers::evaluate_exam))
}
