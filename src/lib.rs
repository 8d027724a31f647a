//! CodeTrack - 编程作业追踪平台后端服务
//!
//! 基于 Actix Web 构建的课堂编程作业追踪系统后端：
//! 教师建班布置外部平台（HackerRank/LeetCode）题目作业，
//! 后台轮询学生的外部提交并与作业题单对账；
//! 限时机考通过第三方评测服务（Judge0 兼容 API）执行。
//!
//! # 架构
//! - `cache`: 缓存层（Moka/Redis）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `integrations`: 出站集成（评测机、HackerRank、LeetCode、题名匹配）
//! - `middlewares`: 认证授权中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期与后台任务
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod integrations;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
