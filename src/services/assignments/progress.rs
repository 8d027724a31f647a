use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::responses::{
    AssignmentProgressResponse, ProblemProgress, StudentProgress,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::classes::require_class_teacher;

/// 作业完成度矩阵（教师视角）
///
/// 对每个班级成员、每道题单题目，从对账后的外部提交里找
/// 最早的一次通过；晚于截止时间的标记 late。
pub async fn get_progress(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(assignment) = (match storage.get_assignment_by_id(assignment_id).await {
        Ok(assignment) => assignment,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    }) else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "作业不存在",
        )));
    };

    // 完成度矩阵包含全班数据，只对教师/管理员开放
    if let Err(resp) = require_class_teacher(&storage, request, assignment.class_id).await {
        return Ok(resp);
    }

    let problems = match storage.list_assignment_problems(assignment_id).await {
        Ok(problems) => problems,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询题单失败: {e}"),
                )),
            );
        }
    };

    let members = match storage.list_class_members(assignment.class_id).await {
        Ok(members) => members,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级成员失败: {e}"),
                )),
            );
        }
    };

    let user_ids: Vec<i64> = members.iter().map(|u| u.id).collect();
    let problem_ids: Vec<i64> = problems.iter().map(|p| p.problem.id).collect();

    let accepted = match storage
        .list_accepted_submissions(&user_ids, &problem_ids)
        .await
    {
        Ok(subs) => subs,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交失败: {e}"),
                )),
            );
        }
    };

    // (user, problem) -> 最早通过时间；查询已按提交时间升序
    let mut solved_at: HashMap<(i64, i64), chrono::DateTime<chrono::Utc>> = HashMap::new();
    for sub in accepted {
        let Some(problem_id) = sub.problem_id else {
            continue;
        };
        solved_at
            .entry((sub.user_id, problem_id))
            .or_insert(sub.submitted_at);
    }

    let students = members
        .into_iter()
        .map(|user| {
            let problem_progress: Vec<ProblemProgress> = problems
                .iter()
                .map(|p| {
                    let at = solved_at.get(&(user.id, p.problem.id)).copied();
                    ProblemProgress {
                        problem_id: p.problem.id,
                        solved: at.is_some(),
                        solved_at: at,
                        late: match (at, assignment.deadline) {
                            (Some(at), Some(deadline)) => at > deadline,
                            _ => false,
                        },
                    }
                })
                .collect();

            let solved = problem_progress.iter().filter(|p| p.solved).count() as i64;
            StudentProgress {
                user_id: user.id,
                username: user.username,
                profile_name: Some(user.profile.profile_name),
                solved,
                total: problems.len() as i64,
                problems: problem_progress,
            }
        })
        .collect();

    let response = AssignmentProgressResponse {
        assignment_id,
        students,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
