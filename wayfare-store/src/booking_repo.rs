use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use wayfare_core::{
    repository::BookingRepository, total_price, Booking, BookingWithPackage, Error, NewBooking,
    Result, TourPackage,
};

use crate::package_repo::{PackageRow, SELECT_PACKAGE};

pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Booking columns joined with the (possibly deleted) package, aliased to
// keep the two record shapes apart.
#[derive(sqlx::FromRow)]
struct BookingJoinRow {
    id: Uuid,
    package_id: Uuid,
    name: String,
    email: String,
    phone: String,
    travelers: i32,
    special_requests: Option<String>,
    total_price: f64,
    created_at: DateTime<Utc>,
    pkg_id: Option<Uuid>,
    pkg_title: Option<String>,
    pkg_description: Option<String>,
    pkg_price: Option<f64>,
    pkg_date: Option<String>,
    pkg_time: Option<String>,
    pkg_image: Option<String>,
}

impl From<BookingJoinRow> for BookingWithPackage {
    fn from(row: BookingJoinRow) -> Self {
        let package = match (
            row.pkg_id,
            row.pkg_title,
            row.pkg_description,
            row.pkg_price,
            row.pkg_date,
            row.pkg_time,
            row.pkg_image,
        ) {
            (Some(id), Some(title), Some(description), Some(price), Some(date), Some(time), Some(image)) => {
                Some(TourPackage {
                    id,
                    title,
                    description,
                    price,
                    date,
                    time,
                    image,
                })
            }
            _ => None,
        };

        BookingWithPackage {
            booking: Booking {
                id: row.id,
                package_id: row.package_id,
                name: row.name,
                email: row.email,
                phone: row.phone,
                travelers: row.travelers,
                special_requests: row.special_requests,
                total_price: row.total_price,
                created_at: row.created_at,
            },
            package,
        }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn book(&self, new: NewBooking) -> Result<Option<(Booking, TourPackage)>> {
        // Lookup and insert share one transaction so the price snapshot
        // cannot straddle a concurrent package update or delete.
        let mut tx = self.pool.begin().await.map_err(Error::store)?;

        let sql = format!("{SELECT_PACKAGE} WHERE id = $1");
        let package: Option<PackageRow> = sqlx::query_as(&sql)
            .bind(new.package_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(Error::store)?;

        let Some(package) = package else {
            // Dropping the transaction rolls it back; nothing was written.
            return Ok(None);
        };

        let booking = Booking {
            id: Uuid::new_v4(),
            package_id: new.package_id,
            name: new.customer.name,
            email: new.customer.email,
            phone: new.customer.phone,
            travelers: new.travelers,
            special_requests: new.special_requests,
            total_price: total_price(new.travelers, package.price),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO bookings
                (id, package_id, name, email, phone, travelers, special_requests, total_price, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(booking.id)
        .bind(booking.package_id)
        .bind(&booking.name)
        .bind(&booking.email)
        .bind(&booking.phone)
        .bind(booking.travelers)
        .bind(&booking.special_requests)
        .bind(booking.total_price)
        .bind(booking.created_at)
        .execute(&mut *tx)
        .await
        .map_err(Error::store)?;

        tx.commit().await.map_err(Error::store)?;

        Ok(Some((booking, package.into())))
    }

    async fn list_with_packages(&self) -> Result<Vec<BookingWithPackage>> {
        // LEFT JOIN: bookings survive a package delete, so the package side
        // may be entirely null.
        let rows: Vec<BookingJoinRow> = sqlx::query_as(
            r#"
            SELECT
                b.id, b.package_id, b.name, b.email, b.phone, b.travelers,
                b.special_requests, b.total_price, b.created_at,
                p.id AS pkg_id, p.title AS pkg_title, p.description AS pkg_description,
                p.price AS pkg_price, p.date AS pkg_date, p.time AS pkg_time,
                p.image AS pkg_image
            FROM bookings b
            LEFT JOIN tour_packages p ON p.id = b.package_id
            ORDER BY b.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::store)?;

        Ok(rows.into_iter().map(BookingWithPackage::from).collect())
    }
}
