use actix_web::HttpResponse;
use actix_web::web::{Data, Json};

use crate::consts;
use crate::models::course::{ErrorBody, OutlineRequest, SubchapterRequest};
use crate::models::exam::ExamSubmission;
use crate::service::CourseService;

fn error_response(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorBody {
        error: message.to_string(),
    })
}

pub async fn generate_chapters(
    service: Data<CourseService>,
    request: Json<OutlineRequest>,
) -> impl actix_web::Responder {
    log::debug!("request: {:?}", request.0);

    match service.generate_chapters(&request.prompt).await {
        Ok(outline) => HttpResponse::Ok().json(outline),
        Err(e) => {
            log::error!("generate_chapters error: {}", e);
            error_response(consts::OUTLINE_ERROR_MESSAGE)
        }
    }
}

pub async fn generate_content(
    service: Data<CourseService>,
    request: Json<SubchapterRequest>,
) -> impl actix_web::Responder {
    log::debug!("request: {:?}", request.0);

    match service
        .generate_content(
            &request.chapter_name,
            &request.subchapter_name,
            &request.prompt,
        )
        .await
    {
        Ok(content) => HttpResponse::Ok().json(content),
        Err(e) => {
            log::error!("generate_content error: {}", e);
            error_response(consts::CONTENT_ERROR_MESSAGE)
        }
    }
}

pub async fn dig_deeper(
    service: Data<CourseService>,
    request: Json<SubchapterRequest>,
) -> impl actix_web::Responder {
    log::debug!("request: {:?}", request.0);

    match service
        .dig_deeper(
            &request.chapter_name,
            &request.subchapter_name,
            &request.prompt,
        )
        .await
    {
        Ok(content) => HttpResponse::Ok().json(content),
        Err(e) => {
            log::error!("dig_deeper error: {}", e);
            error_response(consts::DEEPER_CONTENT_ERROR_MESSAGE)
        }
    }
}

pub async fn generate_exam(
    service: Data<CourseService>,
    request: Json<SubchapterRequest>,
) -> impl actix_web::Responder {
    log::debug!("request: {:?}", request.0);

    match service
        .generate_exam(
            &request.chapter_name,
            &request.subchapter_name,
            &request.prompt,
        )
        .await
    {
        Ok(exam) => HttpResponse::Ok().json(exam),
        Err(e) => {
            log::error!("generate_exam error: {}", e);
            error_response(consts::EXAM_ERROR_MESSAGE)
        }
    }
}

pub async fn evaluate_exam(
    service: Data<CourseService>,
    submission: Json<ExamSubmission>,
) -> impl actix_web::Responder {
    log::debug!(
        "evaluating {} questions, {} answers",
        submission.questions.len(),
        submission.answers.len()
    );

    let evaluation = service.evaluate_exam(&submission).await;
    HttpResponse::Ok().json(evaluation)
}
