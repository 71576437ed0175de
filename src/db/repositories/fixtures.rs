//! Test fixtures for the reporting views
//!
//! In production the five `vw_*` relations are views maintained by the
//! database. Tests stand them up as plain SQLite tables with the same
//! column sets and seed just enough rows to exercise filtering, ordering,
//! and pagination.

use crate::db::{DatabasePool, DynDatabasePool};
use sqlx::SqlitePool;

fn sqlite(pool: &DynDatabasePool) -> &SqlitePool {
    pool.as_sqlite().expect("fixtures require a SQLite test pool")
}

/// Create empty stand-ins for all five reporting views
pub async fn create_report_views(pool: &DynDatabasePool) {
    let statements = [
        "CREATE TABLE vw_sales_daily (
            sale_date TEXT NOT NULL,
            tickets INTEGER NOT NULL,
            total_ventas REAL NOT NULL,
            ticket_promedio REAL NOT NULL,
            ventas_presencial REAL NOT NULL,
            ventas_digital REAL NOT NULL,
            pct_ventas_digital REAL NOT NULL
        )",
        "CREATE TABLE vw_payment_mix (
            metodo_pago TEXT NOT NULL,
            num_transacciones INTEGER NOT NULL,
            total_recaudado REAL NOT NULL,
            pct_del_total REAL NOT NULL,
            ticket_promedio_pago REAL NOT NULL,
            pago_minimo REAL NOT NULL,
            pago_maximo REAL NOT NULL
        )",
        "CREATE TABLE vw_inventory_risk (
            product_id INTEGER NOT NULL,
            nombre_producto TEXT NOT NULL,
            category_id INTEGER NOT NULL,
            categoria TEXT NOT NULL,
            stock_actual INTEGER NOT NULL,
            stock_promedio_categoria REAL NOT NULL,
            pct_vs_promedio_cat REAL NOT NULL,
            nivel_riesgo TEXT NOT NULL
        )",
        "CREATE TABLE vw_customer_value (
            customer_id INTEGER NOT NULL,
            customer_name TEXT NOT NULL,
            customer_email TEXT NOT NULL,
            num_ordenes INTEGER NOT NULL,
            total_gastado REAL NOT NULL,
            gasto_promedio REAL NOT NULL,
            ultima_compra TEXT,
            estado_cliente TEXT NOT NULL
        )",
        "CREATE TABLE vw_top_products_ranked (
            product_id INTEGER NOT NULL,
            nombre_producto TEXT NOT NULL,
            categoria TEXT NOT NULL,
            precio_unitario REAL NOT NULL,
            total_unidades INTEGER NOT NULL,
            total_revenue REAL NOT NULL,
            precio_promedio_venta REAL NOT NULL,
            rank_revenue INTEGER NOT NULL,
            rank_unidades INTEGER NOT NULL
        )",
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(sqlite(pool))
            .await
            .expect("Failed to create fixture view");
    }
}

/// Seed one sales row per date, with derived amounts
pub async fn seed_sales(pool: &DynDatabasePool, dates: &[&str]) {
    for (i, date) in dates.iter().enumerate() {
        let total = 100.0 * (i as f64 + 1.0);
        sqlx::query(
            "INSERT INTO vw_sales_daily
             (sale_date, tickets, total_ventas, ticket_promedio,
              ventas_presencial, ventas_digital, pct_ventas_digital)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(date)
        .bind(10 + i as i64)
        .bind(total)
        .bind(total / 10.0)
        .bind(total * 0.6)
        .bind(total * 0.4)
        .bind(40.0)
        .execute(sqlite(pool))
        .await
        .expect("Failed to seed vw_sales_daily");
    }
}

/// Seed one payment-mix row per (method, total) pair
pub async fn seed_payment_mix(pool: &DynDatabasePool, methods: &[(&str, f64)]) {
    let grand_total: f64 = methods.iter().map(|(_, t)| t).sum();
    for (method, total) in methods {
        sqlx::query(
            "INSERT INTO vw_payment_mix
             (metodo_pago, num_transacciones, total_recaudado, pct_del_total,
              ticket_promedio_pago, pago_minimo, pago_maximo)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(method)
        .bind(20i64)
        .bind(total)
        .bind(total / grand_total * 100.0)
        .bind(total / 20.0)
        .bind(1.5f64)
        .bind(total / 2.0)
        .execute(sqlite(pool))
        .await
        .expect("Failed to seed vw_payment_mix");
    }
}

/// Seed `count` inventory rows per category in `(category_id, count)`
pub async fn seed_inventory_counts(pool: &DynDatabasePool, categories: &[(i64, i64)]) {
    let levels = ["SIN STOCK", "CRÍTICO", "BAJO", "OK"];
    let mut product_id = 1i64;
    for (category_id, count) in categories {
        for i in 0..*count {
            sqlx::query(
                "INSERT INTO vw_inventory_risk
                 (product_id, nombre_producto, category_id, categoria, stock_actual,
                  stock_promedio_categoria, pct_vs_promedio_cat, nivel_riesgo)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(product_id)
            .bind(format!("Producto {}", product_id))
            .bind(*category_id)
            .bind(format!("Categoria {}", category_id))
            .bind(i)
            .bind(10.0f64)
            .bind(i as f64 * 10.0)
            .bind(levels[(i as usize) % levels.len()])
            .execute(sqlite(pool))
            .await
            .expect("Failed to seed vw_inventory_risk");
            product_id += 1;
        }
    }
}

/// Seed `n` customers with strictly decreasing spend
pub async fn seed_customers(pool: &DynDatabasePool, n: i64) {
    for i in 1..=n {
        let spent = 1000.0 - i as f64;
        sqlx::query(
            "INSERT INTO vw_customer_value
             (customer_id, customer_name, customer_email, num_ordenes,
              total_gastado, gasto_promedio, ultima_compra, estado_cliente)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(i)
        .bind(format!("Cliente {}", i))
        .bind(format!("cliente{}@example.com", i))
        .bind(i)
        .bind(spent)
        .bind(spent / i as f64)
        .bind("2024-06-01")
        .bind("FRECUENTE")
        .execute(sqlite(pool))
        .await
        .expect("Failed to seed vw_customer_value");
    }
}

/// Seed one ranked product per name; rank follows slice order
pub async fn seed_products(pool: &DynDatabasePool, names: &[&str]) {
    for (i, name) in names.iter().enumerate() {
        let rank = i as i64 + 1;
        let revenue = 500.0 - i as f64 * 50.0;
        sqlx::query(
            "INSERT INTO vw_top_products_ranked
             (product_id, nombre_producto, categoria, precio_unitario, total_unidades,
              total_revenue, precio_promedio_venta, rank_revenue, rank_unidades)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(rank)
        .bind(name)
        .bind("Bebidas")
        .bind(4.5f64)
        .bind(100 - i as i64)
        .bind(revenue)
        .bind(4.2f64)
        .bind(rank)
        .bind(rank)
        .execute(sqlite(pool))
        .await
        .expect("Failed to seed vw_top_products_ranked");
    }
}
